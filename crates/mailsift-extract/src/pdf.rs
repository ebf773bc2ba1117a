//! PDF content extraction using pdf-extract.

use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// Extract text from a PDF, page by page.
///
/// A page from which no text can be recovered contributes an empty string
/// rather than failing the document; pages are joined with newlines in
/// page order. Only a document that cannot be opened or parsed at all is
/// an error.
pub fn extract_pdf(path: &Path) -> ExtractResult<String> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractError::Pdf(format!("Failed to parse PDF: {}", e)))?;
    Ok(join_pages(&pages))
}

/// Join per-page text with newline separators, preserving empty pages.
pub(crate) fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}
