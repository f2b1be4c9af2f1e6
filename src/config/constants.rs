//! Configuration constants.
//!
//! Defaults for the feed source, the filters, and the HTTP client.

use std::time::Duration;

/// EMSC GeoJSON event feed.
pub const DEFAULT_URL: &str = "https://www.emsc-csem.org/service/api/1.6/get.geojson";
/// Sensor name shown to the host.
pub const DEFAULT_NAME: &str = "EMSC";
/// Icon shown next to the sensor.
pub const ICON: &str = "mdi:pulse";
/// Events at or beyond this distance from the center are dropped.
pub const DEFAULT_RADIUS_IN_KM: f64 = 300.0;
/// Events below this magnitude are dropped.
pub const DEFAULT_MAGNITUDE: f64 = 3.0;
/// Maximum event age in hours.
///
/// Accepted and validated but not applied when filtering.
pub const DEFAULT_AGE_HOURS: f64 = 24.0;
/// Default target time zone for event timestamps.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Interval between two feed updates.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(5 * 60);

// Network operation timeouts
/// Total HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for feed requests.
pub const DEFAULT_USER_AGENT: &str = concat!("quake_watch/", env!("CARGO_PKG_VERSION"));

/// Key under which the filtered events are exposed in the sensor attributes.
pub const ATTR_EARTHQUAKES: &str = "earthquakes";

// Error message size limits
/// Maximum error message length in bytes (500)
/// Failure messages are exposed on `/state`; longer ones are truncated
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;
