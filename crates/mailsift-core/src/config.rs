//! Configuration system for mailsift.

use serde::{Deserialize, Serialize};

use crate::error::{SiftError, SiftResult};

fn default_timeout_secs() -> u64 {
    60
}

/// Settings for talking to the remote inbox service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiftConfig {
    /// API key for the inbox service.
    pub api_key: String,
    /// Base URL override; the client default is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default inbox identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SiftConfig {
    /// Build configuration from environment variables.
    ///
    /// `MAILSIFT_API_KEY` is required; `MAILSIFT_BASE_URL`,
    /// `MAILSIFT_INBOX`, and `MAILSIFT_TIMEOUT_SECS` are optional.
    pub fn from_env() -> SiftResult<Self> {
        let api_key = std::env::var("MAILSIFT_API_KEY")
            .map_err(|_| SiftError::configuration("MAILSIFT_API_KEY not set"))?;

        let timeout_secs = match std::env::var("MAILSIFT_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                SiftError::configuration(format!("invalid MAILSIFT_TIMEOUT_SECS: {raw}"))
            })?,
            Err(_) => default_timeout_secs(),
        };

        Ok(Self {
            api_key,
            base_url: std::env::var("MAILSIFT_BASE_URL").ok(),
            inbox: std::env::var("MAILSIFT_INBOX").ok(),
            timeout_secs,
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SiftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SiftError::configuration(format!("invalid config file: {e}")))
    }
}
