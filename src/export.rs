//! Plain text and JSON output of parsed questions

use anyhow::Result;
use std::fmt::Write;

use crate::quiz::ParsedQuestion;

/// The slice of questions a preview shows, plus how many were left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewWindow<'a> {
    pub shown: &'a [ParsedQuestion],
    pub remaining: usize,
}

pub fn preview_window(questions: &[ParsedQuestion], limit: usize) -> PreviewWindow<'_> {
    let shown = &questions[..questions.len().min(limit)];
    PreviewWindow {
        shown,
        remaining: questions.len() - shown.len(),
    }
}

/// Letter shown in front of the option at `index`
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

pub fn export_to_json(questions: &[ParsedQuestion], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(questions)?
    } else {
        serde_json::to_string(questions)?
    };
    Ok(json)
}

pub fn export_to_text(questions: &[ParsedQuestion], limit: usize) -> Result<String> {
    let mut output = String::new();
    let window = preview_window(questions, limit);

    writeln!(output, "Found {} question(s)", questions.len())?;

    for (number, question) in window.shown.iter().enumerate() {
        output.push('\n');
        writeln!(output, "{}. {}", number + 1, question.question)?;
        for (index, option) in question.options.iter().enumerate() {
            let mark = if *option == question.correct_answer && !option.is_empty() {
                "  (correct)"
            } else {
                ""
            };
            writeln!(output, "   {}) {option}{mark}", option_label(index))?;
        }
    }

    if window.remaining > 0 {
        output.push('\n');
        writeln!(output, "... and {} more question(s)", window.remaining)?;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(count: usize) -> Vec<ParsedQuestion> {
        (0..count)
            .map(|i| ParsedQuestion {
                question: format!("Question {i}?"),
                options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
                correct_answer: "x".into(),
            })
            .collect()
    }

    #[test]
    fn test_preview_window() {
        let qs = questions(5);
        let window = preview_window(&qs, 3);
        assert_eq!(window.shown.len(), 3);
        assert_eq!(window.remaining, 2);

        let window = preview_window(&qs[..2], 3);
        assert_eq!(window.shown.len(), 2);
        assert_eq!(window.remaining, 0);
    }

    #[test]
    fn test_text_export() {
        let output = export_to_text(&questions(4), 3).unwrap();
        assert!(output.starts_with("Found 4 question(s)"));
        assert!(output.contains("1. Question 0?"));
        assert!(output.contains("   B) x  (correct)"));
        assert!(!output.contains("Question 3?"));
        assert!(output.contains("... and 1 more question(s)"));
    }

    #[test]
    fn test_json_export() {
        let json = export_to_json(&questions(1), false).unwrap();
        assert_eq!(
            json,
            r#"[{"question":"Question 0?","options":["w","x","y","z"],"correctAnswer":"x"}]"#
        );
    }
}
