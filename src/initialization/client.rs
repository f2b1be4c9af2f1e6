//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for feed requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Total request timeout from the configuration
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`), capped by the total timeout
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let connect_timeout = Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(timeout);
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_short_timeout() {
        let config = Config {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
