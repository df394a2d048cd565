//! File validation
//!
//! Checks that an input file is something the loader can extract text from
//! before any parsing is attempted.

use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

use super::models::SourceKind;
use crate::error::ExtractionError;

/// Classify the input by extension, rejecting anything unsupported
pub(crate) fn detect_source_kind(file_path: &Path) -> Result<SourceKind, ExtractionError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    SourceKind::from_extension(extension).ok_or_else(|| ExtractionError::UnsupportedFormat {
        extension: extension.to_string(),
    })
}

/// Validates that the reader holds a legitimate .docx ZIP container
pub(crate) fn validate_docx_container<R: Read + Seek>(reader: R) -> Result<(), ExtractionError> {
    let mut archive = ZipArchive::new(reader)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(ExtractionError::Spreadsheet);
        }

        return Err(ExtractionError::MissingDocumentXml);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::path::PathBuf;
    use zip::write::SimpleFileOptions;

    fn zip_with(entries: &[&str]) -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for name in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(b"<xml/>").unwrap();
        }
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn test_detect_source_kind() {
        assert_eq!(
            detect_source_kind(&PathBuf::from("quiz.docx")).unwrap(),
            SourceKind::Docx
        );
        assert_eq!(
            detect_source_kind(&PathBuf::from("quiz.TXT")).unwrap(),
            SourceKind::Text
        );
        assert!(matches!(
            detect_source_kind(&PathBuf::from("quiz.doc")),
            Err(ExtractionError::UnsupportedFormat { extension }) if extension == "doc"
        ));
        assert!(matches!(
            detect_source_kind(&PathBuf::from("quiz")),
            Err(ExtractionError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_container_checks() {
        assert!(validate_docx_container(zip_with(&["word/document.xml"])).is_ok());
        assert!(matches!(
            validate_docx_container(zip_with(&["xl/workbook.xml"])),
            Err(ExtractionError::Spreadsheet)
        ));
        assert!(matches!(
            validate_docx_container(zip_with(&["readme.txt"])),
            Err(ExtractionError::MissingDocumentXml)
        ));
        assert!(matches!(
            validate_docx_container(Cursor::new(b"not a zip".to_vec())),
            Err(ExtractionError::Zip(_))
        ));
    }
}
