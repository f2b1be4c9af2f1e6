//! Error type definitions.
//!
//! This module defines the error enums used throughout the crate and the
//! `ErrorType` categories that failed cycles are counted under.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::utils::TimestampError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid configuration, detected before the first update.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),

    #[error("radius must be a positive number of kilometers, got {0}")]
    InvalidRadius(f64),

    #[error("magnitude must be a finite number, got {0}")]
    InvalidMagnitude(f64),

    #[error("age must be a non-negative number of hours, got {0}")]
    InvalidAge(f64),

    #[error("scan interval must be at least one second")]
    InvalidScanInterval,

    #[error("invalid feed URL {0}")]
    InvalidUrl(String),

    #[error("unknown time zone {0:?}")]
    InvalidTimeZone(String),
}

/// Failure of a single feed update.
///
/// None of these escape `FeedFilter::refresh`; they are logged, counted, and
/// turned into a degraded summary.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Connection failure, timeout, or non-2xx status.
    #[error("feed request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The body is not a feed document or a feature lacks a required field.
    #[error("feed document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// An event time could not be converted.
    #[error("feed event has an invalid time: {0}")]
    Timestamp(#[from] TimestampError),
}

impl FeedError {
    /// Transport failures are network-layer problems; everything else is
    /// about the content of the feed.
    pub fn is_transport(&self) -> bool {
        matches!(self, FeedError::Transport(_))
    }
}

/// Categories a failed update is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestStatusError,
    HttpRequestOtherError,
    // Specific HTTP status code errors
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestTooManyRequests,     // 429 Too Many Requests
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Feed content errors
    FeedParseError,
    FeedTimestampError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::FeedParseError => "Feed parse error",
            ErrorType::FeedTimestampError => "Feed timestamp error",
        }
    }

    /// Label used for the `kind` dimension of the failure metric.
    pub fn metric_label(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "builder",
            ErrorType::HttpRequestTimeoutError => "timeout",
            ErrorType::HttpRequestConnectError => "connect",
            ErrorType::HttpRequestBodyError => "body",
            ErrorType::HttpRequestStatusError
            | ErrorType::HttpRequestNotFound
            | ErrorType::HttpRequestTooManyRequests
            | ErrorType::HttpRequestInternalServerError
            | ErrorType::HttpRequestBadGateway
            | ErrorType::HttpRequestServiceUnavailable
            | ErrorType::HttpRequestGatewayTimeout => "http_status",
            ErrorType::HttpRequestOtherError => "other",
            ErrorType::FeedParseError => "parse",
            ErrorType::FeedTimestampError => "timestamp",
        }
    }
}
