//! Extracted document representation

use serde::{Deserialize, Serialize};

/// Container a quiz document was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Docx,
    Text,
}

impl SourceKind {
    /// Pick the container from a file extension, case-insensitively
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "docx" => Some(SourceKind::Docx),
            "txt" | "text" => Some(SourceKind::Text),
            _ => None,
        }
    }
}

/// Raw text of an uploaded document, paragraphs separated by blank lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub kind: SourceKind,
    pub paragraph_count: usize,
    pub word_count: usize,
}

impl RawDocument {
    /// True when the document holds no visible text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
