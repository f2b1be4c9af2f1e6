//! Per-cycle logging.

use log::info;
use std::time::Duration;

use crate::feed::{FeedStatus, Summary};

/// Logs the outcome of one update cycle.
pub fn log_cycle(cycle: usize, summary: &Summary, elapsed: Duration) {
    match summary.status() {
        FeedStatus::Ok => info!(
            "Update #{}: {} earthquake{} nearby ({:.2}s)",
            cycle,
            summary.count(),
            if summary.count() == 1 { "" } else { "s" },
            elapsed.as_secs_f64()
        ),
        status => info!(
            "Update #{}: degraded to 0 events ({:?}) ({:.2}s)",
            cycle,
            status,
            elapsed.as_secs_f64()
        ),
    }
    for event in summary.events() {
        log::debug!(
            "  M{} {} - {} km - {}",
            event.magnitude,
            event.title,
            event.distance,
            event.time
        );
    }
}
