//! Seismic feed polling and filtering.
//!
//! `FeedFilter::refresh` is the whole update: fetch, parse, filter, summarise.
//! It never fails; any problem yields a degraded [`Summary`] with no events.

mod fetch;
mod filter;
pub mod models;

use std::collections::BTreeMap;
use std::sync::Arc;

use log::warn;
use serde::Serialize;

pub use fetch::fetch_feed;
pub use filter::{filter_features, FilterSettings, FilteredEvent};
pub use models::{parse_feed, FeedDocument};

use crate::config::ATTR_EARTHQUAKES;
use crate::error_handling::{ErrorType, FeedError};
use crate::utils::sanitize_and_truncate_error_message;

/// Outcome of an update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStatus {
    Ok,
    TransportError,
    ParseError,
}

/// Result of one update: the kept events and their count.
///
/// Fields are private so the count cannot drift from the event list.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    events: Vec<FilteredEvent>,
    status: FeedStatus,
    failure: Option<(ErrorType, String)>,
}

impl Summary {
    pub fn from_events(events: Vec<FilteredEvent>) -> Self {
        Self {
            events,
            status: FeedStatus::Ok,
            failure: None,
        }
    }

    /// Empty summary for a failed cycle.
    pub fn degraded(error: &FeedError) -> Self {
        let status = if error.is_transport() {
            FeedStatus::TransportError
        } else {
            FeedStatus::ParseError
        };
        Self {
            events: Vec::new(),
            status,
            failure: Some((
                error.error_type(),
                sanitize_and_truncate_error_message(&error.to_string()),
            )),
        }
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> &[FilteredEvent] {
        &self.events
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn is_degraded(&self) -> bool {
        self.status != FeedStatus::Ok
    }

    /// Failure category, for degraded summaries.
    pub fn error_type(&self) -> Option<ErrorType> {
        self.failure.as_ref().map(|(kind, _)| *kind)
    }

    /// Sanitized failure message, for degraded summaries.
    pub fn error_message(&self) -> Option<&str> {
        self.failure.as_ref().map(|(_, message)| message.as_str())
    }

    /// Attribute payload: the event list under `earthquakes`, or nothing at
    /// all after a failed cycle.
    pub fn attributes(&self) -> BTreeMap<&'static str, &[FilteredEvent]> {
        let mut attributes = BTreeMap::new();
        if !self.is_degraded() {
            attributes.insert(ATTR_EARTHQUAKES, self.events.as_slice());
        }
        attributes
    }
}

/// Stateless feed updater bound to one immutable set of filter settings.
#[derive(Debug, Clone)]
pub struct FeedFilter {
    client: Arc<reqwest::Client>,
    settings: FilterSettings,
}

impl FeedFilter {
    pub fn new(client: Arc<reqwest::Client>, settings: FilterSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// Fetches and filters the feed, surfacing any failure.
    pub async fn try_refresh(&self) -> Result<Vec<FilteredEvent>, FeedError> {
        let body = fetch_feed(&self.client, &self.settings.url).await?;
        let document = parse_feed(&body)?;
        log::debug!(
            "Feed has {} features, filtering around {} within {} km, M >= {}",
            document.features.len(),
            self.settings.center,
            self.settings.radius_km,
            self.settings.min_magnitude
        );
        filter_features(&document, &self.settings)
    }

    /// Runs one update. Failures are logged and degrade to an empty summary.
    pub async fn refresh(&self) -> Summary {
        match self.try_refresh().await {
            Ok(events) => Summary::from_events(events),
            Err(e) => {
                warn!("Update not successful ({}): {}", e.error_type(), e);
                Summary::degraded(&e)
            }
        }
    }
}
