//! Error types for document extraction and quiz submission

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(
        "Invalid file format. Expected .docx or .txt file, got .{extension}\n\
        Note: only Word .docx files and plain text are supported (not .doc, .pdf, .zip, etc.)"
    )]
    UnsupportedFormat { extension: String },

    #[error("This appears to be an Excel file (.xlsx).\nOnly Word documents (.docx) are supported.")]
    Spreadsheet,

    #[error(
        "Invalid .docx file: missing word/document.xml\n\
        This file may be corrupted or is not a valid Word document."
    )]
    MissingDocumentXml,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },

    #[error("Invalid .docx container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to parse .docx document: {0}")]
    Docx(#[from] docx_rs::ReaderError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Quiz title must not be empty")]
    MissingTitle,

    #[error("No valid questions found")]
    NoValidQuestions,
}
