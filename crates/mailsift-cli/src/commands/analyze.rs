//! `mailsift analyze` - run the extraction pipeline on a local file.

use std::path::PathBuf;

use anyhow::bail;
use mailsift_core::ReportEmitter;
use mailsift_extract::analyze_file;
use tracing::info;

pub async fn run(
    path: PathBuf,
    max_chars: usize,
    emitter: &dyn ReportEmitter,
) -> anyhow::Result<()> {
    info!(path = %path.display(), "analyze_attachment.start");

    // Existence is checked here, before any classification.
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let report = tokio::task::spawn_blocking({
        let path = path.clone();
        move || analyze_file(&path, max_chars)
    })
    .await??;

    info!(
        path = %path.display(),
        mode = %report.mode,
        chars_extracted = report.chars_extracted,
        "analyze_attachment.done"
    );

    emitter.emit(&serde_json::to_value(&report)?)?;
    Ok(())
}
