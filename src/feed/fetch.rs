//! Feed download.
//!
//! One GET per update. No retries: a failed cycle waits for the next one.

use reqwest::header::ACCEPT;

use crate::error_handling::FeedError;

const ACCEPT_GEOJSON: &str = "application/geo+json, application/json;q=0.9, */*;q=0.1";

/// Fetches the raw feed body.
///
/// Non-2xx responses are returned as transport errors.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FeedError> {
    let response = client
        .get(url)
        .header(ACCEPT, ACCEPT_GEOJSON)
        .send()
        .await?
        .error_for_status()?;

    log::debug!(
        "Feed responded {} ({} bytes advertised)",
        response.status(),
        response
            .content_length()
            .map_or_else(|| "unknown".to_string(), |len| len.to_string())
    );

    Ok(response.bytes().await?.to_vec())
}
