//! `mailsift download` - fetch a message's attachments to disk.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use mailsift_client::{HttpFetcher, InboxClient};
use mailsift_core::{AttachmentDownloader, ReportEmitter, SiftConfig};
use tracing::info;

pub async fn run(
    message_id: String,
    out_dir: PathBuf,
    attachment_id: Option<String>,
    inbox: Option<String>,
    emitter: &dyn ReportEmitter,
) -> anyhow::Result<()> {
    let config = SiftConfig::from_env()?;
    let inbox = inbox
        .or_else(|| config.inbox.clone())
        .context("no inbox specified: pass --inbox or set MAILSIFT_INBOX")?;

    info!(
        inbox = %inbox,
        message_id = %message_id,
        out_dir = %out_dir.display(),
        attachment_id = ?attachment_id,
        "download_attachments.start"
    );

    let client = Arc::new(InboxClient::from_config(&config)?);
    let fetcher = Arc::new(HttpFetcher::new(config.timeout_secs)?);
    let downloader = AttachmentDownloader::new(client, fetcher);

    let manifest = downloader
        .download_message(&inbox, &message_id, &out_dir, attachment_id.as_deref())
        .await?;

    info!(
        inbox = %inbox,
        message_id = %message_id,
        downloaded_count = manifest.downloaded.len(),
        "download_attachments.done"
    );

    emitter.emit(&serde_json::to_value(&manifest)?)?;
    Ok(())
}
