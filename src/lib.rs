//! quake_watch library: nearby earthquake reporting from the EMSC feed
//!
//! Polls a GeoJSON seismic feed, keeps the events within a radius of a home
//! location and above a magnitude threshold, and exposes them as a sensor whose
//! state is the number of matching events.
//!
//! # Example
//!
//! ```no_run
//! use quake_watch::{run_watch, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     latitude: 37.98,
//!     longitude: 23.73,
//!     time_zone: "Europe/Athens".to_string(),
//!     once: true,
//!     ..Default::default()
//! };
//!
//! let report = run_watch(config, CancellationToken::new()).await?;
//! println!("{} earthquakes nearby", report.last_state.unwrap_or(0));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod error_handling;
pub mod feed;
pub mod geo;
pub mod initialization;
pub mod sensor;
pub mod status_server;
pub mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use feed::{FeedFilter, FeedStatus, FilterSettings, FilteredEvent, Summary};
pub use geo::Coordinate;
pub use run::{run_watch, WatchReport};
pub use sensor::Sensor;

// Internal run module (contains the scheduling loop)
mod run {
    use anyhow::{Context, Result};
    use std::sync::Arc;
    use std::time::Instant;

    use log::{debug, info, warn};
    use tokio::sync::RwLock;
    use tokio::time::MissedTickBehavior;
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_cycle, print_cycle_statistics, shutdown_gracefully};
    use crate::config::Config;
    use crate::error_handling::CycleStats;
    use crate::initialization::init_client;
    use crate::sensor::Sensor;
    use crate::status_server::{start_status_server, StatusState};

    /// Results of a watch run.
    #[derive(Debug, Clone)]
    pub struct WatchReport {
        /// Number of update cycles run
        pub cycles: usize,
        /// Number of cycles that degraded to an empty summary
        pub failed_cycles: usize,
        /// Sensor state after the last cycle
        pub last_state: Option<usize>,
        /// Sensor snapshot after the last cycle (name, state, attributes, status)
        pub final_snapshot: serde_json::Value,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the sensor until `cancel` fires, or for one cycle with `config.once`.
    ///
    /// The first update runs immediately; later ones every `scan_interval_secs`.
    /// Cycles never overlap: a slow update delays the next tick instead of
    /// running alongside it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built. Feed failures never end the run.
    pub async fn run_watch(config: Config, cancel: CancellationToken) -> Result<WatchReport> {
        let start_time = Instant::now();

        config.validate().context("Invalid configuration")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let sensor = Sensor::from_config(&config, client).context("Invalid configuration")?;
        let filter = sensor.filter().clone();
        let settings = filter.settings();
        debug!(
            "latitude={}, longitude={}, url={}, radius={}, magnitude={}, age={}h, time_zone={}",
            settings.center.latitude,
            settings.center.longitude,
            settings.url,
            settings.radius_km,
            settings.min_magnitude,
            config.age,
            settings.time_zone
        );
        debug!(
            "Maximum age of {} hours is accepted but not applied to feed events",
            config.age
        );

        let sensor = Arc::new(RwLock::new(sensor));
        let stats = Arc::new(CycleStats::new());

        let status_task = config.status_port.map(|port| {
            let state = StatusState::new(Arc::clone(&sensor), Arc::clone(&stats));
            tokio::spawn(async move {
                if let Err(e) = start_status_server(port, state).await {
                    warn!("{:#}", e);
                }
            })
        });

        info!(
            "Watching {} for earthquakes of M{}+ within {} km of {}",
            config.url,
            config.magnitude,
            config.radius,
            config.center()
        );

        let mut interval = tokio::time::interval(config.scan_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut failed_cycles = 0;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {}
            }

            let cycle_start = Instant::now();
            let summary = tokio::select! {
                _ = cancel.cancelled() => break,
                summary = filter.refresh() => summary,
            };

            stats.record_cycle();
            if let Some(error_type) = summary.error_type() {
                stats.increment_failure(error_type);
                failed_cycles += 1;
            }
            log_cycle(stats.total_cycles(), &summary, cycle_start.elapsed());
            sensor.write().await.apply(summary);

            if config.once {
                break;
            }
        }

        shutdown_gracefully(status_task).await;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_cycle_statistics(&stats, elapsed_seconds);

        let sensor = sensor.read().await;
        let final_snapshot = serde_json::to_value(sensor.snapshot())
            .context("Failed to serialize sensor snapshot")?;

        Ok(WatchReport {
            cycles: stats.total_cycles(),
            failed_cycles,
            last_state: sensor.state(),
            final_snapshot,
            elapsed_seconds,
        })
    }
}
