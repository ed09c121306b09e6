//! Error types for the intake service

use std::time::Duration;
use thiserror::Error;

/// Email delivery failure. Never leaves the notification gateway; it is
/// reported to callers as a failed `NotificationResult`.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No endpoint URL configured
    #[error("notification endpoint is not configured")]
    Unconfigured,

    /// Request exceeded the configured ceiling
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Email service answered with a non-success status
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not a `{sent, info}` document
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value was present but unusable
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
