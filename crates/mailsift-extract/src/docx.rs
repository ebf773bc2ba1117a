//! DOCX content extraction using docx-rs.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{ExtractError, ExtractResult};

/// Extract text from a DOCX container.
///
/// Paragraph texts are collected in document order and joined with
/// newlines; empty paragraphs keep their slot so blank lines in the
/// document survive. A file that does not parse as a DOCX container is an
/// error.
pub fn extract_docx(path: &Path) -> ExtractResult<String> {
    let bytes = std::fs::read(path)?;

    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            paragraphs.push(paragraph_text(&p));
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Flatten a paragraph's runs into text, keeping tabs and line breaks.
fn paragraph_text(p: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &p.children {
        match child {
            ParagraphChild::Run(r) => {
                for run_child in &r.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(h) => {
                // Hyperlink children are ParagraphChild; only their run
                // text matters here.
                for child in &h.children {
                    if let ParagraphChild::Run(r) = child {
                        for run_child in &r.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    text
}
