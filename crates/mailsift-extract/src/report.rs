//! Extraction report assembly and the end-to-end pipeline.

use std::path::Path;

use crate::classify::classify;
use crate::error::ExtractResult;
use crate::text::{normalize, summarize};
use crate::types::{ExtractionMode, ExtractionReport};

/// Assemble the final report from an extraction pass.
///
/// `chars_extracted` counts the raw text before normalization; the summary
/// is built from the normalized text and only when extraction yielded
/// anything at all, so binary mode and empty documents report `None`. The
/// path is canonicalized and must still exist for the size stat.
pub fn build_report(
    path: &Path,
    mode: ExtractionMode,
    raw_text: &str,
    max_chars: usize,
) -> ExtractResult<ExtractionReport> {
    let size = std::fs::metadata(path)?.len();
    let resolved = path.canonicalize()?;

    let summary = if raw_text.is_empty() {
        None
    } else {
        Some(summarize(&normalize(raw_text), max_chars))
    };

    Ok(ExtractionReport {
        path: resolved.to_string_lossy().into_owned(),
        mode,
        size,
        chars_extracted: raw_text.chars().count(),
        summary,
    })
}

/// Run the full pipeline for one file: classify, extract, report.
///
/// One linear pass with no retries; fatal errors from any stage bubble to
/// the caller unmodified.
pub fn analyze_file(path: &Path, max_chars: usize) -> ExtractResult<ExtractionReport> {
    let mode = classify(path);
    let raw_text = crate::extract(path, mode)?;
    build_report(path, mode, &raw_text, max_chars)
}
