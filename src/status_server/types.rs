//! Status server shared state.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::error_handling::CycleStats;
use crate::sensor::Sensor;

/// Shared state for the status server.
///
/// The run loop holds the write side of `sensor` only while swapping in a new
/// summary; handlers take read locks.
#[derive(Clone)]
pub struct StatusState {
    pub sensor: Arc<RwLock<Sensor>>,
    pub stats: Arc<CycleStats>,
    pub start_time: Arc<Instant>,
}

impl StatusState {
    pub fn new(sensor: Arc<RwLock<Sensor>>, stats: Arc<CycleStats>) -> Self {
        Self {
            sensor,
            stats,
            start_time: Arc::new(Instant::now()),
        }
    }
}
