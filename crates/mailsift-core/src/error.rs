//! Error types for mailsift operations.

use thiserror::Error;

/// Result type alias for mailsift operations.
pub type SiftResult<T> = Result<T, SiftError>;

/// Main error type for mailsift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Configuration error (missing or invalid settings).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote API call failed.
    #[error("API error: {message}")]
    Api {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested resource does not exist on the remote service.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SiftError {
    /// Create an API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            source: None,
        }
    }

    /// Create an API error wrapping an underlying cause.
    pub fn api_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Api {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Map a non-success HTTP response to an error.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            404 => Self::NotFound(body.to_string()),
            401 | 403 => Self::api(format!("authentication rejected (HTTP {status}): {body}")),
            _ => Self::api(format!("HTTP {status}: {body}")),
        }
    }
}
