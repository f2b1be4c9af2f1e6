//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, timeouts, limits)
//! - CLI option types and parsing
//! - Validation of a parsed configuration before the first update

mod constants;
mod types;
mod validation;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
