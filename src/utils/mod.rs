//! Shared helpers.
//!
//! This module provides:
//! - Epoch timestamp conversion into zoned ISO-8601 strings
//! - Error message sanitization for anything exposed outside the process

pub mod sanitize;
pub mod timestamp;

pub use sanitize::sanitize_and_truncate_error_message;
pub use timestamp::{format_epoch_in_zone, TimestampError};
