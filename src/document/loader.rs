//! Document loading
//!
//! Reads an input file, validates its container and produces the
//! [`RawDocument`] the quiz parser consumes.

use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

use super::io::{detect_source_kind, validate_docx_container};
use super::models::*;
use super::text::{extract_document_paragraphs, join_paragraphs};
use crate::error::ExtractionError;
use crate::quiz::parser::split_blocks;

/// Load a .docx or plain text file and extract its raw text
///
/// This function:
/// 1. Picks the container from the file extension
/// 2. Reads the file
/// 3. Validates the ZIP structure for .docx input
/// 4. Extracts paragraph text, rebuilding automatic list markers
/// 5. Joins paragraphs with blank lines
pub async fn load_raw_text(file_path: &Path) -> Result<RawDocument, ExtractionError> {
    let kind = detect_source_kind(file_path)?;

    let bytes = tokio::fs::read(file_path)
        .await
        .map_err(|source| ExtractionError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;
    let file_size = bytes.len() as u64;

    let (text, paragraph_count) = match kind {
        SourceKind::Docx => extract_docx_text(&bytes)?,
        SourceKind::Text => {
            let text = String::from_utf8(bytes).map_err(|_| ExtractionError::NotUtf8 {
                path: file_path.to_path_buf(),
            })?;
            let paragraph_count = split_blocks(&text).len();
            (text, paragraph_count)
        }
    };

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Quiz")
        .to_string();

    let word_count = text.split_whitespace().count();
    info!(
        path = %file_path.display(),
        ?kind,
        paragraphs = paragraph_count,
        words = word_count,
        "extracted document text"
    );

    Ok(RawDocument {
        title,
        metadata: DocumentMetadata {
            file_path: file_path.to_string_lossy().to_string(),
            file_size,
            kind,
            paragraph_count,
            word_count,
        },
        text,
    })
}

/// Extract raw text from in-memory .docx bytes.
///
/// Returns the joined text and the number of non-empty paragraphs.
pub fn extract_docx_text(bytes: &[u8]) -> Result<(String, usize), ExtractionError> {
    validate_docx_container(Cursor::new(bytes))?;

    let docx = docx_rs::read_docx(bytes)?;
    let paragraphs = extract_document_paragraphs(&docx);
    let paragraph_count = paragraphs.iter().filter(|p| !p.trim().is_empty()).count();
    debug!(
        paragraphs = paragraphs.len(),
        non_empty = paragraph_count,
        "read docx paragraphs"
    );

    Ok((join_paragraphs(&paragraphs), paragraph_count))
}
