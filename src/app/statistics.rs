//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{CycleStats, ErrorType};

/// Prints cycle and failure counts to the log.
pub fn print_cycle_statistics(stats: &CycleStats, elapsed_seconds: f64) {
    let cycles = stats.total_cycles();
    let total_failures = stats.total_failures();

    info!(
        "Ran {} update{} ({} failed) in {:.1}s",
        cycles,
        if cycles == 1 { "" } else { "s" },
        total_failures,
        elapsed_seconds
    );

    if total_failures > 0 {
        info!("Failure Counts ({} total):", total_failures);
        for error_type in ErrorType::iter() {
            let count = stats.get_failure_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}
