//! Run loop helpers.
//!
//! Per-cycle logging, end-of-run statistics, and shutdown of background tasks.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::log_cycle;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_cycle_statistics;
