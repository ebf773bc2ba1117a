//! Attachment and manifest types.

use serde::{Deserialize, Serialize};

/// One attachment as listed on a message by the inbox service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentDescriptor {
    /// Service-assigned attachment identifier.
    pub attachment_id: String,
    /// Original filename, when the service knows one.
    #[serde(default)]
    pub filename: Option<String>,
    /// MIME content type reported by the service.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// One attachment written to disk by the downloader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadedAttachment {
    pub attachment_id: String,
    /// Filename the bytes were written under.
    pub filename: String,
    /// Resolved absolute path of the written file.
    pub path: String,
    /// Number of bytes written.
    pub bytes: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    /// SHA-256 of the written bytes, hex encoded.
    pub sha256: String,
}

/// Result of downloading a message's attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadManifest {
    pub inbox: String,
    pub message_id: String,
    pub downloaded: Vec<DownloadedAttachment>,
}
