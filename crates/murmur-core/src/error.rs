//! Error types for murmur-core

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `AppConfig`
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized back to TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Completion transport error
///
/// The `Display` text is what reaches the failure classifier, so each variant
/// names its category in plain words.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not finish in time
    #[error("request timeout: {0}")]
    Timeout(String),

    /// DNS, connect or socket failure
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("server error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Missing API key or similar local setup problem
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            TransportError::Network(err.to_string())
        } else if err.is_decode() {
            TransportError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
