//! Quiz data structures
//!
//! The parser's output record plus the per-block outcomes and report types
//! that describe how each block of the source text was handled.

use serde::{Deserialize, Serialize};

/// One multiple-choice question extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub question: String,
    /// Always exactly four entries; unfilled slots are empty strings
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// Which rule settled a question's correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Option line carrying a correctness glyph; the last marked line wins
    Marker,
    /// Trailing `Answer:` line naming a letter, digit or option text
    AnswerLine,
    /// Nothing named an answer, so the first option was taken
    DefaultFirst,
}

/// Why a block produced no question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than two non-blank lines
    TooFewLines,
    /// Question line was empty once its label was removed
    EmptyQuestion,
    /// No line carried an option marker
    NoOptions,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::TooFewLines => "fewer than two lines",
            SkipReason::EmptyQuestion => "empty question text",
            SkipReason::NoOptions => "no option lines",
        };
        f.write_str(text)
    }
}

/// Result of parsing a single block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockOutcome {
    Parsed {
        block: usize,
        question: ParsedQuestion,
        source: AnswerSource,
    },
    Skipped {
        block: usize,
        reason: SkipReason,
    },
}

impl BlockOutcome {
    pub fn block(&self) -> usize {
        match self {
            BlockOutcome::Parsed { block, .. } | BlockOutcome::Skipped { block, .. } => *block,
        }
    }

    pub fn question(&self) -> Option<&ParsedQuestion> {
        match self {
            BlockOutcome::Parsed { question, .. } => Some(question),
            BlockOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, BlockOutcome::Skipped { .. })
    }
}

/// Which sweep produced a report's questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePass {
    /// Blank-line separated blocks
    Primary,
    /// Question-mark terminated lines, used when the primary pass found nothing
    Fallback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    pub questions: Vec<ParsedQuestion>,
    /// Outcomes of the pass that produced `questions`
    pub outcomes: Vec<BlockOutcome>,
    /// `None` when the input held no text at all
    pub pass: Option<ParsePass>,
}

impl ParseReport {
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
