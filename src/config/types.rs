//! Configuration types and CLI options.
//!
//! `Config` doubles as the clap parser for the binary and as a plain struct
//! for library users. Every flag that the host would normally supply also
//! reads from an environment variable.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_AGE_HOURS, DEFAULT_MAGNITUDE, DEFAULT_NAME, DEFAULT_RADIUS_IN_KM, DEFAULT_TIME_ZONE,
    DEFAULT_URL, DEFAULT_USER_AGENT, HTTP_TIMEOUT_SECS, SCAN_INTERVAL,
};
use crate::geo::Coordinate;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// # Examples
///
/// ```bash
/// # Earthquakes of magnitude 4+ within 500 km of Athens
/// quake_watch --latitude 37.98 --longitude 23.73 --radius 500 --magnitude 4 \
///     --time-zone Europe/Athens
///
/// # Single update, print the sensor as JSON and exit
/// HOME_LATITUDE=37.98 HOME_LONGITUDE=23.73 quake_watch --once
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "quake_watch",
    version,
    about = "Reports recent earthquakes from the EMSC feed near a home location."
)]
pub struct Config {
    /// GeoJSON feed URL
    #[arg(long, env = "QUAKE_WATCH_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Latitude of the center point (decimal degrees)
    #[arg(long, env = "HOME_LATITUDE", allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude of the center point (decimal degrees)
    #[arg(long, env = "HOME_LONGITUDE", allow_negative_numbers = true)]
    pub longitude: f64,

    /// Only events closer than this many kilometers are reported
    #[arg(long, env = "QUAKE_WATCH_RADIUS", default_value_t = DEFAULT_RADIUS_IN_KM)]
    pub radius: f64,

    /// Sensor name
    #[arg(long, env = "QUAKE_WATCH_NAME", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Only events of at least this magnitude are reported
    #[arg(long, env = "QUAKE_WATCH_MAGNITUDE", default_value_t = DEFAULT_MAGNITUDE)]
    pub magnitude: f64,

    /// Maximum event age in hours (accepted, not applied when filtering)
    #[arg(long, env = "QUAKE_WATCH_AGE_HOURS", default_value_t = DEFAULT_AGE_HOURS)]
    pub age: f64,

    /// IANA time zone for event timestamps (e.g. Europe/Athens)
    #[arg(long, env = "QUAKE_WATCH_TIME_ZONE", default_value = DEFAULT_TIME_ZONE)]
    pub time_zone: String,

    /// Seconds between two feed updates
    #[arg(long, default_value_t = SCAN_INTERVAL.as_secs())]
    pub scan_interval_secs: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// HTTP status server port (disabled when not set)
    #[arg(long)]
    pub status_port: Option<u16>,

    /// Run a single update, print the sensor as JSON, and exit
    #[arg(long)]
    pub once: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Center point of the radius filter.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            radius: DEFAULT_RADIUS_IN_KM,
            name: DEFAULT_NAME.to_string(),
            magnitude: DEFAULT_MAGNITUDE,
            age: DEFAULT_AGE_HOURS,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            scan_interval_secs: SCAN_INTERVAL.as_secs(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            status_port: None,
            once: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.radius, 300.0);
        assert_eq!(config.magnitude, 3.0);
        assert_eq!(config.age, 24.0);
        assert_eq!(config.name, "EMSC");
        assert_eq!(config.scan_interval_secs, 300);
        assert_eq!(config.time_zone, "UTC");
        assert!(config.status_port.is_none());
        assert!(!config.once);
    }

    #[test]
    fn test_center_from_config() {
        let config = Config {
            latitude: 37.98,
            longitude: 23.73,
            ..Default::default()
        };
        assert_eq!(config.center(), Coordinate::new(37.98, 23.73));
    }

    #[test]
    fn test_parse_minimal_arguments() {
        let config =
            Config::try_parse_from(["quake_watch", "--latitude", "-33.45", "--longitude", "-70.66"])
                .expect("minimal arguments should parse");
        assert_eq!(config.latitude, -33.45);
        assert_eq!(config.longitude, -70.66);
        assert_eq!(config.scan_interval_secs, 300);
    }
}
