//! quizdocx: multiple-choice quiz extraction from .docx files
//!
//! This library reads Microsoft Word documents (or plain text), extracts the
//! questions, options and correct answers they contain, and prepares them for
//! preview and for submission to a quiz-creation endpoint.

use serde::{Deserialize, Serialize};

pub mod ansi;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod payload;
pub mod quiz;

/// Output format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Colored terminal preview
    Ansi,
    /// Plain text preview
    Text,
    /// All parsed questions as a JSON array
    Json,
    /// Quiz-creation request body
    Payload,
}

/// Color depth options for ANSI output
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorDepth {
    /// Auto-detect terminal color capabilities
    #[serde(rename = "auto")]
    Auto,
    /// Monochrome (no colors)
    #[value(name = "1")]
    #[serde(rename = "1")]
    Monochrome,
    /// 16 colors
    #[value(name = "4")]
    #[serde(rename = "4")]
    Standard,
    /// 256 colors
    #[value(name = "8")]
    #[serde(rename = "8")]
    Extended,
    /// 24-bit true color
    #[value(name = "24")]
    #[serde(rename = "24")]
    TrueColor,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{RawDocument, load_raw_text};
pub use error::{ExtractionError, PayloadError};
pub use payload::{QuizDetails, QuizPayload};
pub use quiz::{ParseReport, ParsedQuestion, QuizDocumentParser, parse_quiz_text};
