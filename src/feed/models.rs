//! Upstream feed document model.
//!
//! Only the fields the filter reads are modelled; everything else in the
//! GeoJSON is ignored. Location and magnitude are checked for every feature
//! when the document is parsed. The remaining properties are only decoded, via
//! [`EventProperties::details`], for events that pass the filters.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error_handling::FeedError;
use crate::geo::Coordinate;
use crate::utils::TimestampError;

/// A GeoJSON feature collection.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    pub features: Vec<Feature>,
}

/// One event record.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: EventProperties,
}

/// Raw event properties as published by the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct EventProperties {
    pub location: Location,
    pub magnitude: Magnitude,
    /// Everything else, decoded on demand
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Properties only needed once an event is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDetails {
    pub place: Place,
    pub time: EventTime,
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_maps")]
    pub maps: MapLinks,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Magnitude {
    pub mag: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventTime {
    pub time: EpochSeconds,
}

/// Epoch seconds, published either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EpochSeconds {
    Number(f64),
    Text(String),
}

impl EpochSeconds {
    pub fn as_seconds(&self) -> Result<f64, TimestampError> {
        match self {
            EpochSeconds::Number(n) => Ok(*n),
            EpochSeconds::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| TimestampError::NotNumeric(s.clone())),
        }
    }
}

/// Map image links keyed by map type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapLinks {
    #[serde(default)]
    pub seismicity: Option<String>,
    #[serde(default)]
    pub intensity: Option<String>,
}

impl MapLinks {
    /// Seismicity map, else intensity map, else an empty string.
    ///
    /// Empty links count as absent.
    pub fn preferred_link(&self) -> &str {
        [&self.seismicity, &self.intensity]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|link| !link.is_empty())
            .unwrap_or("")
    }
}

/// The feed encodes "no maps" as `[]` or `null` rather than `{}`.
fn deserialize_maps<'de, D>(deserializer: D) -> Result<MapLinks, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapsField {
        Links(MapLinks),
        List(Vec<serde_json::Value>),
        Null,
    }

    Ok(match MapsField::deserialize(deserializer)? {
        MapsField::Links(links) => links,
        MapsField::List(_) | MapsField::Null => MapLinks::default(),
    })
}

impl EventProperties {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.location.lat, self.location.lon)
    }

    /// Decodes region, time, link and maps.
    ///
    /// Fails with [`FeedError::Parse`] when one of them is missing or
    /// malformed.
    pub fn details(&self) -> Result<EventDetails, FeedError> {
        Ok(serde_json::from_value(Value::Object(self.rest.clone()))?)
    }
}

/// Parses raw feed bytes into a document.
pub fn parse_feed(bytes: &[u8]) -> Result<FeedDocument, FeedError> {
    Ok(serde_json::from_slice(bytes)?)
}
