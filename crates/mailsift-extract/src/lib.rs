//! mailsift-extract - Attachment content extraction and summarization.
//!
//! Turns a locally downloaded attachment into a structured
//! [`ExtractionReport`]: classify the file by extension, extract its text,
//! collapse whitespace, and truncate to a bounded summary.
//!
//! # Example
//!
//! ```ignore
//! use mailsift_extract::{analyze_file, DEFAULT_SUMMARY_CHARS};
//!
//! let report = analyze_file("downloads/invoice.pdf".as_ref(), DEFAULT_SUMMARY_CHARS)?;
//! println!("{} chars extracted", report.chars_extracted);
//! ```
//!
//! The pipeline is synchronous and pure between filesystem reads: each call
//! is independent, nothing is cached, and the input file is never mutated.

mod classify;
mod decode;
mod docx;
mod error;
mod pdf;
mod report;
mod text;
mod types;

pub use classify::classify;
pub use decode::decode_utf8_dropping;
pub use error::{ExtractError, ExtractResult};
pub use report::{analyze_file, build_report};
pub use text::{normalize, summarize, DEFAULT_SUMMARY_CHARS};
pub use types::{ExtractionMode, ExtractionReport};

use std::path::Path;

/// Extract raw text from a file according to its classified mode.
///
/// Plain files are read with the byte-dropping UTF-8 policy and never fail
/// on encoding. PDF and DOCX files that cannot be opened as their container
/// format are fatal errors; a single PDF page without extractable text is
/// not. Binary mode returns an empty string without touching the file.
pub fn extract(path: &Path, mode: ExtractionMode) -> ExtractResult<String> {
    match mode {
        ExtractionMode::Plain => {
            let bytes = std::fs::read(path)?;
            Ok(decode_utf8_dropping(&bytes))
        }
        ExtractionMode::Pdf => pdf::extract_pdf(path),
        ExtractionMode::Docx => docx::extract_docx(path),
        ExtractionMode::Binary => Ok(String::new()),
    }
}
