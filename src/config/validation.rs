//! Configuration validation.
//!
//! Runs once before the first update. The feed filter assumes everything here
//! has already been checked.

use chrono_tz::Tz;
use std::time::Duration;

use super::types::Config;
use crate::error_handling::ConfigError;
use crate::feed::FilterSettings;

impl Config {
    /// Checks every field the update routine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigError::InvalidLongitude(self.longitude));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.magnitude.is_finite() {
            return Err(ConfigError::InvalidMagnitude(self.magnitude));
        }
        if !self.age.is_finite() || self.age < 0.0 {
            return Err(ConfigError::InvalidAge(self.age));
        }
        if self.scan_interval_secs == 0 {
            return Err(ConfigError::InvalidScanInterval);
        }
        validate_url(&self.url)?;
        self.time_zone()?;
        Ok(())
    }

    /// Parses the configured IANA time zone.
    pub fn time_zone(&self) -> Result<Tz, ConfigError> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimeZone(self.time_zone.clone()))
    }

    /// Time between two updates.
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    /// Validates the configuration and captures what the feed filter needs.
    pub fn filter_settings(&self) -> Result<FilterSettings, ConfigError> {
        self.validate()?;
        Ok(FilterSettings {
            url: self.url.clone(),
            center: self.center(),
            radius_km: self.radius,
            min_magnitude: self.magnitude,
            time_zone: self.time_zone()?,
        })
    }
}

fn validate_url(raw: &str) -> Result<(), ConfigError> {
    let parsed =
        url::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}
