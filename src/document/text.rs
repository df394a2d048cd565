//! Plain text extraction from docx-rs elements
//!
//! Produces one string per paragraph, in document order, with table cell
//! paragraphs flattened in row order. Tracked deletions are skipped and
//! tracked insertions kept.

use super::numbering::ListMarkerTracker;

/// Extract plain text from a paragraph, handling various child elements
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }

    text.trim().to_string()
}

/// Extract text from a run; soft line breaks become newlines
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Paragraph text with any automatic list marker prepended
fn numbered_paragraph_text(para: &docx_rs::Paragraph, markers: &mut ListMarkerTracker) -> String {
    let text = extract_paragraph_text(para);
    if text.is_empty() {
        return text;
    }

    match &para.property.numbering_property {
        Some(num_pr) => match num_pr.id.as_ref() {
            Some(id) => {
                let level = num_pr.level.as_ref().map(|l| l.val).unwrap_or(0);
                format!("{}{text}", markers.next_marker(id.id, level))
            }
            None => text,
        },
        None => text,
    }
}

fn collect_table_paragraphs(
    table: &docx_rs::Table,
    markers: &mut ListMarkerTracker,
    paragraphs: &mut Vec<String>,
) {
    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => {
                        paragraphs.push(numbered_paragraph_text(para, markers));
                    }
                    docx_rs::TableCellContent::Table(nested) => {
                        collect_table_paragraphs(nested, markers, paragraphs);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// All paragraph texts of a document in reading order, empty ones included
pub(crate) fn extract_document_paragraphs(docx: &docx_rs::Docx) -> Vec<String> {
    let mut markers = ListMarkerTracker::new();
    let mut paragraphs = Vec::new();

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                paragraphs.push(numbered_paragraph_text(para, &mut markers));
            }
            docx_rs::DocumentChild::Table(table) => {
                collect_table_paragraphs(table, &mut markers, &mut paragraphs);
            }
            _ => {
                // Section properties, bookmarks and similar carry no text
            }
        }
    }

    paragraphs
}

/// Join paragraphs the way the quiz parser expects: each paragraph is
/// followed by a blank line, so paragraph breaks survive as block separators
pub(crate) fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}
