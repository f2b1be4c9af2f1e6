// Shared test helpers for feed fixtures and mock servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::{json, Value};

use quake_watch::{Coordinate, FeedFilter, FilterSettings};

/// One feature as the EMSC feed publishes it.
#[allow(dead_code)] // Used by other test files
pub fn feature(region: &str, lat: f64, lon: f64, mag: f64, time: Value, maps: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [lon, lat, -10.0]},
        "properties": {
            "location": {"lat": lat, "lon": lon, "depth": 10.0},
            "magnitude": {"mag": mag, "type": "ml"},
            "place": {"region": region, "country": null},
            "time": {"time": time},
            "url": format!("https://www.emsc-csem.org/Earthquake/{}", region.to_lowercase()),
            "maps": maps,
        }
    })
}

/// A feed with one event that matches a (0, 0) / 300 km / M3 filter, one that is
/// too weak, and one that is too far.
#[allow(dead_code)] // Used by other test files
pub fn sample_feed() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            feature(
                "Testland",
                0.0,
                2.2458,
                4.2,
                json!(1_700_000_000),
                json!({"seismicity": "https://maps.example/seis.png"}),
            ),
            feature("Weakland", 0.5, 0.5, 2.9, json!(1_700_000_100), json!([])),
            feature("Farland", 10.0, 10.0, 6.0, json!("1700000200"), Value::Null),
        ]
    })
}

/// Starts a mock server answering `GET /feed` with `status` and `body`, any
/// number of times.
#[allow(dead_code)] // Used by other test files
pub fn feed_server(status: u16, body: String) -> Server {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/feed"))
            .times(..)
            .respond_with(status_code(status).body(body)),
    );
    server
}

/// Filter settings centered on (0, 0) with the default radius and magnitude.
#[allow(dead_code)] // Used by other test files
pub fn settings(url: String) -> FilterSettings {
    FilterSettings {
        url,
        center: Coordinate::new(0.0, 0.0),
        radius_km: 300.0,
        min_magnitude: 3.0,
        time_zone: chrono_tz::UTC,
    }
}

#[allow(dead_code)] // Used by other test files
pub fn feed_filter(url: String) -> FeedFilter {
    FeedFilter::new(Arc::new(reqwest::Client::new()), settings(url))
}
