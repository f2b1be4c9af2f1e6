//! Prometheus metrics handler.

use std::collections::BTreeMap;
use std::fmt::Write;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::StatusState;
use crate::error_handling::ErrorType;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<StatusState>) -> Response {
    let events = state.sensor.read().await.state().unwrap_or(0);
    let cycles = state.stats.total_cycles();
    let uptime = state.start_time.elapsed().as_secs_f64();

    let mut failures: BTreeMap<&str, usize> = BTreeMap::new();
    for error_type in ErrorType::iter() {
        *failures.entry(error_type.metric_label()).or_default() +=
            state.stats.get_failure_count(error_type);
    }

    let mut metrics = format!(
        r#"# HELP quake_watch_events Earthquakes matching the filters in the last update
# TYPE quake_watch_events gauge
quake_watch_events {}

# HELP quake_watch_cycles_total Update cycles run
# TYPE quake_watch_cycles_total counter
quake_watch_cycles_total {}

# HELP quake_watch_uptime_seconds Seconds since the watcher started
# TYPE quake_watch_uptime_seconds gauge
quake_watch_uptime_seconds {:.3}

# HELP quake_watch_cycle_failures_total Failed update cycles by kind
# TYPE quake_watch_cycle_failures_total counter
"#,
        events, cycles, uptime
    );
    for (kind, count) in failures {
        // Writing to a String cannot fail
        let _ = writeln!(
            metrics,
            "quake_watch_cycle_failures_total{{kind=\"{}\"}} {}",
            kind, count
        );
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics,
    )
        .into_response()
}
