//! Host-facing sensor entity.
//!
//! Wraps a [`FeedFilter`] and keeps the most recent [`Summary`]. The state is
//! the number of nearby earthquakes; the attributes carry the events.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{Config, ICON};
use crate::error_handling::ConfigError;
use crate::feed::{FeedFilter, FeedStatus, FilteredEvent, Summary};

use std::collections::BTreeMap;
use std::sync::Arc;

/// Earthquake count sensor.
#[derive(Debug)]
pub struct Sensor {
    name: String,
    filter: FeedFilter,
    summary: Option<Summary>,
    last_updated: Option<DateTime<Utc>>,
}

/// Serializable view of a sensor, as served on `/state` and printed by `--once`.
#[derive(Debug, Serialize)]
pub struct SensorSnapshot<'a> {
    pub name: &'a str,
    pub icon: &'static str,
    pub unit_of_measurement: Option<&'static str>,
    pub state: Option<usize>,
    pub attributes: Option<BTreeMap<&'static str, &'a [FilteredEvent]>>,
    pub last_updated: Option<String>,
    pub status: Option<FeedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl Sensor {
    pub fn new(name: impl Into<String>, filter: FeedFilter) -> Self {
        Self {
            name: name.into(),
            filter,
            summary: None,
            last_updated: None,
        }
    }

    /// Builds a sensor from a validated configuration.
    pub fn from_config(config: &Config, client: Arc<reqwest::Client>) -> Result<Self, ConfigError> {
        let settings = config.filter_settings()?;
        Ok(Self::new(config.name.clone(), FeedFilter::new(client, settings)))
    }

    /// Feed updater this sensor refreshes through.
    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &'static str {
        ICON
    }

    /// The count has no unit.
    pub fn unit_of_measurement(&self) -> Option<&'static str> {
        None
    }

    /// Number of matching events, `None` until the first update.
    pub fn state(&self) -> Option<usize> {
        self.summary.as_ref().map(Summary::count)
    }

    /// Event attributes, `None` until the first update.
    pub fn attributes(&self) -> Option<BTreeMap<&'static str, &[FilteredEvent]>> {
        self.summary.as_ref().map(Summary::attributes)
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Runs one feed update and replaces the previous summary.
    pub async fn update(&mut self) -> &Summary {
        let summary = self.filter.refresh().await;
        self.apply(summary)
    }

    /// Replaces the current summary with an already computed one.
    pub fn apply(&mut self, summary: Summary) -> &Summary {
        self.last_updated = Some(Utc::now());
        self.summary.insert(summary)
    }

    pub fn snapshot(&self) -> SensorSnapshot<'_> {
        SensorSnapshot {
            name: &self.name,
            icon: self.icon(),
            unit_of_measurement: self.unit_of_measurement(),
            state: self.state(),
            attributes: self.attributes(),
            last_updated: self.last_updated.map(|t| t.to_rfc3339()),
            status: self.summary.as_ref().map(Summary::status),
            error: self.summary.as_ref().and_then(Summary::error_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FeedError;
    use crate::feed::{FeedDocument, FilterSettings};
    use crate::geo::Coordinate;

    fn sensor() -> Sensor {
        let settings = FilterSettings {
            url: "http://127.0.0.1:9/feed".to_string(),
            center: Coordinate::new(0.0, 0.0),
            radius_km: 300.0,
            min_magnitude: 3.0,
            time_zone: chrono_tz::UTC,
        };
        Sensor::new(
            "EMSC",
            FeedFilter::new(Arc::new(reqwest::Client::new()), settings),
        )
    }

    fn event() -> FilteredEvent {
        FilteredEvent {
            title: "Testland".to_string(),
            magnitude: 4.0,
            time: "2023-11-14T22:13:20+00:00".to_string(),
            distance: 250,
            link: String::new(),
            image_link: String::new(),
        }
    }

    #[test]
    fn test_sensor_before_first_update() {
        let sensor = sensor();
        assert_eq!(sensor.name(), "EMSC");
        assert_eq!(sensor.icon(), ICON);
        assert!(sensor.unit_of_measurement().is_none());
        assert!(sensor.state().is_none());
        assert!(sensor.attributes().is_none());
        assert!(sensor.last_updated().is_none());
    }

    #[test]
    fn test_failed_cycle_replaces_previous_events() {
        let mut sensor = sensor();
        sensor.apply(Summary::from_events(vec![event()]));
        assert_eq!(sensor.state(), Some(1));

        let err = FeedError::from(serde_json::from_slice::<FeedDocument>(b"{}").unwrap_err());
        sensor.apply(Summary::degraded(&err));
        assert_eq!(sensor.state(), Some(0));
        assert_eq!(sensor.attributes().map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut sensor = sensor();
        sensor.apply(Summary::from_events(vec![event()]));
        let value = serde_json::to_value(sensor.snapshot()).unwrap();
        assert_eq!(value["name"], "EMSC");
        assert_eq!(value["state"], 1);
        assert_eq!(value["status"], "ok");
        assert_eq!(value["attributes"]["earthquakes"][0]["distance"], 250);
        assert!(value.get("error").is_none());
        assert!(value["last_updated"].is_string());
    }

    #[test]
    fn test_from_config_captures_filter_settings() {
        let config = Config {
            latitude: 37.98,
            longitude: 23.73,
            radius: 500.0,
            magnitude: 4.5,
            name: "Athens".to_string(),
            time_zone: "Europe/Athens".to_string(),
            ..Default::default()
        };
        let sensor = Sensor::from_config(&config, Arc::new(reqwest::Client::new()))
            .expect("valid config");

        assert_eq!(sensor.name(), "Athens");
        let settings = sensor.filter().settings();
        assert_eq!(settings.center, Coordinate::new(37.98, 23.73));
        assert_eq!(settings.radius_km, 500.0);
        assert_eq!(settings.min_magnitude, 4.5);
        assert_eq!(settings.time_zone, chrono_tz::Europe::Athens);
        assert!(sensor.state().is_none());
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = Config {
            radius: -1.0,
            ..Default::default()
        };
        let err = Sensor::from_config(&config, Arc::new(reqwest::Client::new())).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRadius(-1.0));
    }

    #[tokio::test]
    async fn test_update_against_unreachable_feed_degrades() {
        let mut sensor = sensor();
        let summary = sensor.update().await;
        assert_eq!(summary.count(), 0);
        assert_eq!(summary.status(), FeedStatus::TransportError);
        assert_eq!(sensor.state(), Some(0));
    }
}
