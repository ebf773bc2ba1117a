//! Extension-based format classification.

use std::path::Path;

use crate::types::ExtractionMode;

/// Classify a file into its handling mode from the path extension.
///
/// Total over all paths: the extension is lowercased and matched against a
/// closed set, and anything unrecognized (or a path with no extension)
/// falls through to [`ExtractionMode::Binary`]. Performs no filesystem
/// access; existence is the caller's responsibility.
pub fn classify(path: &Path) -> ExtractionMode {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("txt" | "md" | "csv" | "json" | "log") => ExtractionMode::Plain,
        Some("pdf") => ExtractionMode::Pdf,
        Some("docx") => ExtractionMode::Docx,
        _ => ExtractionMode::Binary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_extensions() {
        for name in ["a.txt", "a.md", "a.csv", "a.json", "a.log"] {
            assert_eq!(classify(Path::new(name)), ExtractionMode::Plain, "{name}");
        }
    }

    #[test]
    fn test_pdf_and_docx() {
        assert_eq!(classify(Path::new("report.pdf")), ExtractionMode::Pdf);
        assert_eq!(classify(Path::new("letter.docx")), ExtractionMode::Docx);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(classify(Path::new("REPORT.PDF")), ExtractionMode::Pdf);
        assert_eq!(classify(Path::new("notes.TXT")), ExtractionMode::Plain);
    }

    #[test]
    fn test_unknown_extension_is_binary() {
        assert_eq!(classify(Path::new("notes.xyz")), ExtractionMode::Binary);
        assert_eq!(classify(Path::new("archive.zip")), ExtractionMode::Binary);
        // Legacy .doc is not the docx container format.
        assert_eq!(classify(Path::new("letter.doc")), ExtractionMode::Binary);
    }

    #[test]
    fn test_no_extension_is_binary() {
        assert_eq!(classify(Path::new("Makefile")), ExtractionMode::Binary);
        assert_eq!(classify(Path::new(".gitignore")), ExtractionMode::Binary);
    }
}
