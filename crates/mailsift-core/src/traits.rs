//! Capability traits for the inbox service and result emission.
//!
//! The download and extraction logic is written against these traits so it
//! can be exercised with fake implementations in tests, independent of any
//! specific remote client.

use async_trait::async_trait;

use crate::error::SiftResult;
use crate::types::AttachmentDescriptor;

/// Lists a message's attachments and resolves their download URLs.
#[async_trait]
pub trait AttachmentSource: Send + Sync {
    /// List the attachments on a message.
    async fn list_attachments(
        &self,
        inbox: &str,
        message_id: &str,
    ) -> SiftResult<Vec<AttachmentDescriptor>>;

    /// Resolve the short-lived download URL for one attachment.
    async fn attachment_url(
        &self,
        inbox: &str,
        message_id: &str,
        attachment_id: &str,
    ) -> SiftResult<String>;
}

/// Fetches attachment bytes over HTTP.
#[async_trait]
pub trait TransferFetcher: Send + Sync {
    /// Download the full body at `url`. Non-success HTTP statuses are
    /// errors.
    async fn download(&self, url: &str) -> SiftResult<Vec<u8>>;
}

/// Receives the final result structure for the caller-visible channel.
pub trait ReportEmitter: Send + Sync {
    /// Emit one result value.
    fn emit(&self, value: &serde_json::Value) -> SiftResult<()>;
}
