//! HTTP status server exposing the sensor to the host.
//!
//! Provides two endpoints:
//! - `/state` - JSON with the sensor state, attributes, and last update status
//! - `/metrics` - Prometheus-compatible metrics
//!
//! The server runs in the background and does not block feed updates.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::{metrics_handler, state_handler};
pub use types::StatusState;

/// Builds the status router.
pub fn router(state: StatusState) -> Router {
    Router::new()
        .route("/state", get(state_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Binds to `127.0.0.1:<port>` and serves until the task is dropped.
pub async fn start_status_server(port: u16, state: StatusState) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind status server to port {}: {}", port, e))?;

    log::info!("Status server listening on http://127.0.0.1:{}/", port);
    log::info!("  - State: http://127.0.0.1:{}/state", port);
    log::info!("  - Metrics: http://127.0.0.1:{}/metrics", port);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Status server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::error_handling::CycleStats;
    use crate::feed::{FeedFilter, FilterSettings};
    use crate::geo::Coordinate;
    use crate::sensor::Sensor;

    fn state() -> StatusState {
        let settings = FilterSettings {
            url: "http://127.0.0.1:9/feed".to_string(),
            center: Coordinate::new(0.0, 0.0),
            radius_km: 300.0,
            min_magnitude: 3.0,
            time_zone: chrono_tz::UTC,
        };
        let filter = FeedFilter::new(Arc::new(reqwest::Client::new()), settings);
        StatusState::new(
            Arc::new(RwLock::new(Sensor::new("EMSC", filter))),
            Arc::new(CycleStats::new()),
        )
    }

    #[tokio::test]
    async fn test_start_status_server_port_in_use() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = start_status_server(port, state()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind status server"));
        assert!(err.to_string().contains(&port.to_string()));
    }
}
