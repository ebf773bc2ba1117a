//! Attachment download orchestration.

use std::path::Path;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::SiftResult;
use crate::traits::{AttachmentSource, TransferFetcher};
use crate::types::{DownloadManifest, DownloadedAttachment};

/// Downloads a message's attachments to a local directory.
///
/// Workflow per message:
/// 1. List attachment descriptors from the source
/// 2. Filter to a single attachment id when requested
/// 3. Resolve each download URL and fetch the bytes
/// 4. Write to the output directory and record a manifest entry
pub struct AttachmentDownloader {
    source: Arc<dyn AttachmentSource>,
    fetcher: Arc<dyn TransferFetcher>,
}

impl AttachmentDownloader {
    /// Create a downloader over an attachment source and a fetcher.
    pub fn new(source: Arc<dyn AttachmentSource>, fetcher: Arc<dyn TransferFetcher>) -> Self {
        Self { source, fetcher }
    }

    /// Download attachments for `message_id` into `out_dir`.
    ///
    /// With `attachment_id` set, only the matching descriptor is
    /// downloaded; an id that matches nothing yields an empty manifest.
    /// Attachments without a filename fall back to
    /// `<attachment_id>.bin`.
    pub async fn download_message(
        &self,
        inbox: &str,
        message_id: &str,
        out_dir: &Path,
        attachment_id: Option<&str>,
    ) -> SiftResult<DownloadManifest> {
        let mut attachments = self.source.list_attachments(inbox, message_id).await?;

        if let Some(id) = attachment_id {
            attachments.retain(|a| a.attachment_id == id);
        }

        tokio::fs::create_dir_all(out_dir).await?;

        let mut downloaded = Vec::with_capacity(attachments.len());
        for descriptor in attachments {
            let url = self
                .source
                .attachment_url(inbox, message_id, &descriptor.attachment_id)
                .await?;
            let bytes = self.fetcher.download(&url).await?;

            let filename = descriptor
                .filename
                .clone()
                .unwrap_or_else(|| format!("{}.bin", descriptor.attachment_id));
            let target = out_dir.join(&filename);
            tokio::fs::write(&target, &bytes).await?;
            let resolved = tokio::fs::canonicalize(&target).await?;

            debug!(
                attachment_id = %descriptor.attachment_id,
                bytes = bytes.len(),
                path = %resolved.display(),
                "attachment written"
            );

            downloaded.push(DownloadedAttachment {
                attachment_id: descriptor.attachment_id,
                filename,
                path: resolved.to_string_lossy().into_owned(),
                bytes: bytes.len() as u64,
                content_type: descriptor.content_type,
                sha256: hex::encode(Sha256::digest(&bytes)),
            });
        }

        Ok(DownloadManifest {
            inbox: inbox.to_string(),
            message_id: message_id.to_string(),
            downloaded,
        })
    }
}
