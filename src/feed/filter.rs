//! Distance and magnitude filtering of a parsed feed.

use chrono_tz::Tz;
use serde::Serialize;

use super::models::{EventProperties, FeedDocument};
use crate::error_handling::FeedError;
use crate::geo::Coordinate;
use crate::utils::format_epoch_in_zone;

/// Everything one update needs, captured once from a validated `Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSettings {
    /// Feed URL
    pub url: String,
    /// Center of the radius filter
    pub center: Coordinate,
    /// Events must be strictly closer than this (after rounding)
    pub radius_km: f64,
    /// Events must be at least this strong
    pub min_magnitude: f64,
    /// Zone event times are rendered in
    pub time_zone: Tz,
}

/// An event that passed both filters, ready to be exposed as an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredEvent {
    /// Region name
    pub title: String,
    pub magnitude: f64,
    /// Event time in the configured zone, ISO-8601 with offset
    pub time: String,
    /// Distance to the center, whole kilometers
    pub distance: u32,
    /// Event detail page
    pub link: String,
    /// Seismicity or intensity map, empty when the feed has neither
    #[serde(rename = "imglink")]
    pub image_link: String,
}

impl FilterSettings {
    /// Rounded distance if the event passes both filters.
    ///
    /// The radius bound is exclusive, the magnitude bound inclusive.
    pub fn matches(&self, event: &EventProperties) -> Option<f64> {
        let distance = self.center.rounded_distance_km(&event.coordinate());
        (distance < self.radius_km && event.magnitude.mag >= self.min_magnitude)
            .then_some(distance)
    }
}

/// Keeps the matching features in feed order.
///
/// Fails only when a kept event has a malformed region, time, link or maps
/// entry. Dropped events are never decoded past location and magnitude.
pub fn filter_features(
    document: &FeedDocument,
    settings: &FilterSettings,
) -> Result<Vec<FilteredEvent>, FeedError> {
    let mut kept = Vec::new();
    for feature in &document.features {
        let event = &feature.properties;
        let Some(distance) = settings.matches(event) else {
            log::trace!(
                "Skipping M{} at {} outside filters",
                event.magnitude.mag,
                event.coordinate()
            );
            continue;
        };

        let details = event.details()?;
        let seconds = details.time.time.as_seconds()?;
        // rounded, non-negative, at most half the Earth's circumference
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let distance = distance as u32;
        let filtered = FilteredEvent {
            title: details.place.region,
            magnitude: event.magnitude.mag,
            time: format_epoch_in_zone(seconds, settings.time_zone)?,
            distance,
            image_link: details.maps.preferred_link().to_string(),
            link: details.url,
        };
        log::debug!(
            "Keeping {} M{} at {} km",
            filtered.title,
            filtered.magnitude,
            filtered.distance
        );
        kept.push(filtered);
    }
    Ok(kept)
}
