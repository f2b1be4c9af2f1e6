//! Error handling and update statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, feed updates)
//! - Categorization of feed failures
//! - Per-run cycle statistics

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::CycleStats;
pub use types::{ConfigError, ErrorType, FeedError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cycle_stats_initialization() {
        let stats = CycleStats::new();
        assert_eq!(stats.total_cycles(), 0);
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_failure_count(error_type), 0);
        }
    }

    #[test]
    fn test_cycle_stats_increment() {
        let stats = CycleStats::new();
        stats.record_cycle();
        stats.record_cycle();
        stats.increment_failure(ErrorType::HttpRequestConnectError);
        assert_eq!(stats.total_cycles(), 2);
        assert_eq!(
            stats.get_failure_count(ErrorType::HttpRequestConnectError),
            1
        );
    }

    #[test]
    fn test_cycle_stats_totals() {
        let stats = CycleStats::new();
        stats.increment_failure(ErrorType::FeedParseError);
        stats.increment_failure(ErrorType::FeedParseError);
        stats.increment_failure(ErrorType::HttpRequestTimeoutError);
        assert_eq!(stats.total_failures(), 3);
        assert_eq!(stats.get_failure_count(ErrorType::FeedParseError), 2);
    }
}
