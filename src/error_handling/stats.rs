//! Update cycle statistics.
//!
//! Thread-safe counters shared between the run loop and the status server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Counts completed update cycles and failed ones by category.
///
/// All error types are initialized to zero on creation, so lookups never miss.
/// Share it across tasks with `Arc`.
pub struct CycleStats {
    cycles: AtomicUsize,
    failures: HashMap<ErrorType, AtomicUsize>,
}

impl CycleStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for error in ErrorType::iter() {
            failures.insert(error, AtomicUsize::new(0));
        }

        CycleStats {
            cycles: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records one completed cycle, successful or not.
    pub fn record_cycle(&self) {
        self.cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failure category for the current cycle.
    pub fn increment_failure(&self, error: ErrorType) {
        if let Some(counter) = self.failures.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in CycleStats initialization.",
                error
            );
        }
    }

    /// Total number of cycles run.
    pub fn total_cycles(&self) -> usize {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Get the count for an error type.
    pub fn get_failure_count(&self, error: ErrorType) -> usize {
        self.failures
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total failure count across all error types.
    pub fn total_failures(&self) -> usize {
        ErrorType::iter().map(|e| self.get_failure_count(e)).sum()
    }
}

impl Default for CycleStats {
    fn default() -> Self {
        Self::new()
    }
}
