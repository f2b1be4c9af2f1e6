//! Error categorization.
//!
//! Maps feed failures onto the `ErrorType` they are counted under.

use super::types::{ErrorType, FeedError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        match status.as_u16() {
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            500 => return ErrorType::HttpRequestInternalServerError,
            502 => return ErrorType::HttpRequestBadGateway,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            504 => return ErrorType::HttpRequestGatewayTimeout,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestStatusError;
            }
            _ => {
                // Non-standard status codes - fall through to check error type
            }
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::HttpRequestBodyError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

impl FeedError {
    /// Category this failure is counted under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FeedError::Transport(e) => categorize_reqwest_error(e),
            FeedError::Parse(_) => ErrorType::FeedParseError,
            FeedError::Timestamp(_) => ErrorType::FeedTimestampError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimestampError;

    #[test]
    fn test_parse_error_category() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(FeedError::from(err).error_type(), ErrorType::FeedParseError);
    }

    #[test]
    fn test_timestamp_error_category() {
        let err = FeedError::from(TimestampError::NotFinite(f64::NAN));
        assert_eq!(err.error_type(), ErrorType::FeedTimestampError);
    }

    #[test]
    fn test_builder_error_category() {
        // An unparseable URL fails while building the request
        let err = reqwest::Client::new()
            .get("http://[::1")
            .build()
            .unwrap_err();
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestBuilderError
        );
    }

    // Status and connect categories need a live server; they are covered by
    // the mock-server tests in tests/feed_refresh.rs.
}
