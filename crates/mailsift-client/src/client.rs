//! Inbox client implementation for the hosted inbox API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;

use mailsift_core::config::SiftConfig;
use mailsift_core::error::{SiftError, SiftResult};
use mailsift_core::traits::{AttachmentSource, TransferFetcher};
use mailsift_core::types::AttachmentDescriptor;

/// Default base URL for the hosted inbox API.
pub const DEFAULT_BASE_URL: &str = "https://api.agentmail.to/v0";

/// Client for the hosted inbox API.
pub struct InboxClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    attachments: Vec<AttachmentDescriptor>,
}

#[derive(Debug, Deserialize)]
struct AttachmentMetaResponse {
    download_url: String,
}

impl InboxClient {
    /// Create a new client with the default base URL and timeout.
    pub fn new(api_key: &str) -> SiftResult<Self> {
        Self::with_options(api_key, None, 60)
    }

    /// Create a new client with options.
    pub fn with_options(
        api_key: &str,
        base_url: Option<&str>,
        timeout_secs: u64,
    ) -> SiftResult<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| SiftError::configuration("API key contains invalid characters"))?;
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SiftError::api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).to_string(),
        })
    }

    /// Create a client from a configuration.
    pub fn from_config(config: &SiftConfig) -> SiftResult<Self> {
        Self::with_options(
            &config.api_key,
            config.base_url.as_deref(),
            config.timeout_secs,
        )
    }

    /// Create a client from environment variables.
    pub fn from_env() -> SiftResult<Self> {
        Self::from_config(&SiftConfig::from_env()?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> SiftResult<T> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SiftError::api(format!("Failed to reach inbox service: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SiftError::from_http_status(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| SiftError::api(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl AttachmentSource for InboxClient {
    async fn list_attachments(
        &self,
        inbox: &str,
        message_id: &str,
    ) -> SiftResult<Vec<AttachmentDescriptor>> {
        let url = format!("{}/inboxes/{}/messages/{}", self.base_url, inbox, message_id);
        let message: MessageResponse = self.get_json(url).await?;
        Ok(message.attachments)
    }

    async fn attachment_url(
        &self,
        inbox: &str,
        message_id: &str,
        attachment_id: &str,
    ) -> SiftResult<String> {
        let url = format!(
            "{}/inboxes/{}/messages/{}/attachments/{}",
            self.base_url, inbox, message_id, attachment_id
        );
        let meta: AttachmentMetaResponse = self.get_json(url).await?;
        Ok(meta.download_url)
    }
}

/// Fetcher for pre-signed download URLs.
///
/// Uses a bare client without auth headers; the URLs carry their own
/// credentials.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout_secs: u64) -> SiftResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SiftError::api(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TransferFetcher for HttpFetcher {
    async fn download(&self, url: &str) -> SiftResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SiftError::api(format!("Failed to download attachment: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SiftError::from_http_status(status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SiftError::api(format!("Failed to read attachment body: {}", e)))?;
        Ok(bytes.to_vec())
    }
}
