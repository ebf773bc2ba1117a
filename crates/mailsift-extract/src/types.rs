//! Core types for content extraction.

use serde::{Deserialize, Serialize};

/// Handling mode for a source file, derived from its extension.
///
/// Exactly one mode per file; extensions outside the supported set
/// (including no extension at all) map to [`ExtractionMode::Binary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Plain text content (txt, md, csv, json, log).
    Plain,
    /// PDF document.
    Pdf,
    /// Word document container.
    Docx,
    /// Unsupported format; no extraction is attempted.
    Binary,
}

impl ExtractionMode {
    /// Lowercase wire name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Plain => "plain",
            ExtractionMode::Pdf => "pdf",
            ExtractionMode::Docx => "docx",
            ExtractionMode::Binary => "binary",
        }
    }
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final result of one extraction pass, handed to the caller's emitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Canonical absolute path of the analyzed file.
    pub path: String,
    /// Handling mode the file was classified into.
    pub mode: ExtractionMode,
    /// File size in bytes.
    pub size: u64,
    /// Character count of the raw extracted text, pre-normalization.
    pub chars_extracted: usize,
    /// Bounded summary of the normalized text; `None` when nothing was
    /// extracted.
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ExtractionMode::Docx).unwrap();
        assert_eq!(json, "\"docx\"");
    }

    #[test]
    fn test_mode_display_matches_wire_name() {
        assert_eq!(ExtractionMode::Plain.to_string(), "plain");
        assert_eq!(ExtractionMode::Binary.to_string(), "binary");
    }

    #[test]
    fn test_report_summary_null_when_absent() {
        let report = ExtractionReport {
            path: "/tmp/a.bin".to_string(),
            mode: ExtractionMode::Binary,
            size: 4,
            chars_extracted: 0,
            summary: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["summary"].is_null());
        assert_eq!(value["mode"], "binary");
    }
}
