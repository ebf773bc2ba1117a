//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during content extraction.
///
/// Only whole-document failures are errors: a PDF page with no extractable
/// text or undecodable bytes in a plain file are tolerated by design.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// IO error reading the source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF document failed to open or parse.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// DOCX container failed to open or parse.
    #[error("DOCX extraction error: {0}")]
    Docx(String),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
