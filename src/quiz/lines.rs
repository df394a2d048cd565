//! Line classification for quiz blocks
//!
//! Every trimmed line of a block is turned into a [`LineToken`]: an option
//! line with its marker, a trailing answer line, or plain text that carries no
//! quiz structure. Question lines are handled separately because the first
//! line of a block is always the question, whatever it looks like.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sanitize::sanitize;

/// Glyphs that flag an option as the correct one
pub const CORRECTNESS_GLYPHS: [char; 3] = ['✓', '✅', '*'];

/// Number of answer slots a question always carries
pub const OPTION_SLOTS: usize = 4;

// Leading "Q3:", "Question 4)", "Q.", "2." labels in front of a question.
// Bare numbers need trailing whitespace so "3.14 is pi?" keeps its number.
static QUESTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:question|q)\s*\d+\s*[.:)\-]?\s*|(?:question|q)\s*[.:)\-]\s*|\d+\s*[.:)]\s+)")
        .unwrap()
});

// "A)", "b.", "(C)", "3)", "D Paris": a letter A-D or digit 1-4, then a
// separator, whitespace or end of line. "Berlin" is not a "B" marker.
static OPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\(?([a-d1-4])(?:[.):]|\s|$)\s*(.*)$").unwrap());

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^answer\s*[:.]\s*(.*)$").unwrap());

// "correct", "(correct)", "[Correct]"
static CORRECT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[(\[]?\s*correct\s*[)\]]?").unwrap());

/// A classified block line
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LineToken {
    /// Candidate answer line, marker already stripped
    Option {
        marker: char,
        text: String,
        marked_correct: bool,
    },
    /// Trailing `Answer:` line with the text after the prefix
    Answer(String),
    /// Line with no option marker; contributes nothing
    Text,
}

/// How an answer line refers to an option
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AnswerReference {
    /// Zero-based option index from a letter A-D
    Letter(usize),
    /// Zero-based option index from a digit 1-4
    Digit(usize),
    /// Anything else, compared verbatim against the collected options
    Literal(String),
}

/// Remove a leading question label or number and sanitize the rest
pub(crate) fn strip_question_label(line: &str) -> String {
    let line = line.trim();
    let unlabeled = match QUESTION_LABEL.find(line) {
        Some(label) => &line[label.end()..],
        None => line,
    };
    sanitize(unlabeled)
}

/// Classify a block line.
///
/// `answer_allowed` is true only for the last line of a primary-pass block;
/// the answer-line convention is not recognized anywhere else.
pub(crate) fn classify_line(line: &str, answer_allowed: bool) -> LineToken {
    let line = line.trim();

    if answer_allowed {
        if let Some(captures) = ANSWER_LINE.captures(line) {
            let content = captures.get(1).map_or("", |m| m.as_str());
            return LineToken::Answer(sanitize(content));
        }
    }

    if let Some(captures) = OPTION_MARKER.captures(line) {
        let marker = captures
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_uppercase());
        let remainder = captures.get(2).map_or("", |m| m.as_str());

        if let Some(marker) = marker {
            return LineToken::Option {
                marker,
                text: strip_correctness_markers(remainder),
                marked_correct: carries_correctness_marker(line),
            };
        }
    }

    LineToken::Text
}

/// True if the raw line holds a correctness glyph or the substring "correct"
pub(crate) fn carries_correctness_marker(line: &str) -> bool {
    line.chars().any(|c| CORRECTNESS_GLYPHS.contains(&c))
        || line.to_lowercase().contains("correct")
}

/// Remove correctness glyphs and the word "correct", then sanitize
pub(crate) fn strip_correctness_markers(text: &str) -> String {
    let without_word = CORRECT_WORD.replace_all(text, " ");
    let without_glyphs: String = without_word
        .chars()
        .filter(|c| !CORRECTNESS_GLYPHS.contains(c))
        .collect();
    sanitize(&without_glyphs)
}

/// Interpret the content of an answer line
pub(crate) fn parse_answer_reference(content: &str) -> AnswerReference {
    let content = content.trim();
    let mut chars = content.chars();

    if let (Some(c), None) = (chars.next(), chars.next()) {
        match c.to_ascii_uppercase() {
            letter @ 'A'..='D' => return AnswerReference::Letter((letter as u8 - b'A') as usize),
            digit @ '1'..='4' => return AnswerReference::Digit((digit as u8 - b'1') as usize),
            _ => {}
        }
    }

    AnswerReference::Literal(content.to_string())
}

/// True for lines the fallback sweep treats as question starters
pub(crate) fn is_question_line(line: &str) -> bool {
    line.trim_end().ends_with('?')
}
