//! Application initialization.
//!
//! This module provides functions to set up the logger and the shared HTTP
//! client. Both return proper error types for the binary to report.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
