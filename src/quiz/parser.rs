//! Quiz document parser
//!
//! Turns raw document text into [`ParsedQuestion`]s in two sweeps:
//!
//! 1. **Primary**: split on blank lines, one question per block, with
//!    correctness glyphs and an optional trailing `Answer:` line.
//! 2. **Fallback**: only when the primary sweep found nothing. Every line
//!    ending in `?` starts a question and the lines up to the next such line
//!    are its option candidates. Answer lines are not recognized here.
//!
//! Malformed blocks never fail the parse; they show up as
//! [`BlockOutcome::Skipped`] entries and diagnostics.

use tracing::info;

use super::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, TracingSink};
use super::lines::is_question_line;
use super::machine::{AnswerLineMode, parse_block};
use super::models::{BlockOutcome, ParsePass, ParseReport, ParsedQuestion};

/// Best-effort extractor for multiple-choice questions
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizDocumentParser;

impl QuizDocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw_text`, forwarding diagnostics to `tracing`
    pub fn parse(&self, raw_text: &str) -> Vec<ParsedQuestion> {
        self.parse_with_sink(raw_text, &mut TracingSink).questions
    }

    /// Parse `raw_text` and return the diagnostics collected on the way
    pub fn parse_with_diagnostics(&self, raw_text: &str) -> (ParseReport, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let report = self.parse_with_sink(raw_text, &mut diagnostics);
        (report, diagnostics)
    }

    /// Parse `raw_text`, recording diagnostics into `sink`
    pub fn parse_with_sink<S: DiagnosticSink + ?Sized>(
        &self,
        raw_text: &str,
        sink: &mut S,
    ) -> ParseReport {
        if raw_text.trim().is_empty() {
            sink.record(Diagnostic::info(None, "no content found"));
            return ParseReport::default();
        }

        let outcomes = primary_pass(raw_text, sink);
        let questions = collect_questions(&outcomes);
        if !questions.is_empty() {
            info!(
                questions = questions.len(),
                blocks = outcomes.len(),
                "parsed quiz text"
            );
            return ParseReport {
                questions,
                outcomes,
                pass: Some(ParsePass::Primary),
            };
        }

        sink.record(Diagnostic::info(
            None,
            format!(
                "no questions in {} block(s); trying question-mark sweep",
                outcomes.len()
            ),
        ));

        let outcomes = fallback_pass(raw_text, sink);
        let questions = collect_questions(&outcomes);
        if questions.is_empty() {
            sink.record(Diagnostic::warn(None, "no valid questions found"));
        }
        info!(
            questions = questions.len(),
            segments = outcomes.len(),
            "parsed quiz text with fallback sweep"
        );

        ParseReport {
            questions,
            outcomes,
            pass: Some(ParsePass::Fallback),
        }
    }
}

/// Convenience wrapper around [`QuizDocumentParser::parse`]
pub fn parse_quiz_text(raw_text: &str) -> Vec<ParsedQuestion> {
    QuizDocumentParser::new().parse(raw_text)
}

/// Split text into blocks of trimmed, non-empty lines.
///
/// A line is blank when it is empty after [`str::trim`], so no-break spaces
/// and form feeds separate blocks like any other whitespace.
pub(crate) fn split_blocks(raw_text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in raw_text.lines().map(str::trim) {
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn primary_pass<S: DiagnosticSink + ?Sized>(raw_text: &str, sink: &mut S) -> Vec<BlockOutcome> {
    split_blocks(raw_text)
        .iter()
        .enumerate()
        .map(|(index, lines)| parse_block(index, lines, AnswerLineMode::Recognize, &mut *sink))
        .collect()
}

fn fallback_pass<S: DiagnosticSink + ?Sized>(raw_text: &str, sink: &mut S) -> Vec<BlockOutcome> {
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_question_line(line))
        .map(|(index, _)| index)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(segment, &start)| {
            let end = starts.get(segment + 1).copied().unwrap_or(lines.len());
            parse_block(segment, &lines[start..end], AnswerLineMode::Ignore, &mut *sink)
        })
        .collect()
}

fn collect_questions(outcomes: &[BlockOutcome]) -> Vec<ParsedQuestion> {
    outcomes
        .iter()
        .filter_map(BlockOutcome::question)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::models::SkipReason;
    use super::*;

    #[test]
    fn test_split_blocks() {
        let text = "Q1?\nA) a\n\n\n  \nQ2?\r\nA) b\r\n\r\nlone line\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], vec!["Q1?", "A) a"]);
        assert_eq!(blocks[1], vec!["Q2?", "A) b"]);
        assert_eq!(blocks[2], vec!["lone line"]);
    }

    #[test]
    fn test_unicode_whitespace_lines_separate_blocks() {
        for separator in ["\u{a0}", "\u{c}", "\u{b}", " \u{a0}\t"] {
            let text = format!("Q1?\nA) a\nB) b *\n{separator}\nQ2?\nA) c\nB) d *");
            assert_eq!(split_blocks(&text).len(), 2, "separator {separator:?}");

            let questions = parse_quiz_text(&text);
            assert_eq!(questions.len(), 2, "separator {separator:?}");
            assert_eq!(questions[0].options, vec!["a", "b", "", ""]);
            assert_eq!(questions[0].correct_answer, "b");
            assert_eq!(questions[1].options, vec!["c", "d", "", ""]);
            assert_eq!(questions[1].correct_answer, "d");
        }
    }

    #[test]
    fn test_empty_input() {
        let parser = QuizDocumentParser::new();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("  \n\t\n ").is_empty());

        let (report, diagnostics) = parser.parse_with_diagnostics("   ");
        assert_eq!(report.pass, None);
        assert_eq!(diagnostics.records()[0].message, "no content found");
    }

    #[test]
    fn test_primary_pass_reports_skipped_blocks() {
        let text = "Lonely heading\n\nWhat is 2+2?\nA) 3\nB) 4 ✓\nC) 5\nD) 6";
        let (report, _) = QuizDocumentParser::new().parse_with_diagnostics(text);

        assert_eq!(report.pass, Some(ParsePass::Primary));
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(
            report.outcomes[0],
            BlockOutcome::Skipped {
                block: 0,
                reason: SkipReason::TooFewLines
            }
        );
    }

    #[test]
    fn test_fallback_segments_on_question_marks() {
        // One paragraph per line leaves every block with a single line
        let text = "What is 2+2?\n\nA) 3\n\nB) 4 ✓\n\nWhat is 3+3?\n\nA) 6\n\nB) 7";
        let (report, _) = QuizDocumentParser::new().parse_with_diagnostics(text);

        assert_eq!(report.pass, Some(ParsePass::Fallback));
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[0].question, "What is 2+2?");
        assert_eq!(report.questions[0].options, vec!["3", "4", "", ""]);
        assert_eq!(report.questions[0].correct_answer, "4");
        assert_eq!(report.questions[1].correct_answer, "6");
    }

    #[test]
    fn test_fallback_ignores_answer_lines() {
        let text = "What is 2+2?\n\nA) 3\n\nB) 4\n\nAnswer: B";
        let (report, diagnostics) = QuizDocumentParser::new().parse_with_diagnostics(text);

        assert_eq!(report.pass, Some(ParsePass::Fallback));
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].correct_answer, "3");
        assert!(diagnostics
            .records()
            .iter()
            .any(|d| d.message.contains("question-mark sweep")));
    }

    #[test]
    fn test_no_structure_anywhere() {
        let text = "just some prose\nwith lines\nand no questions at all";
        let (report, diagnostics) = QuizDocumentParser::new().parse_with_diagnostics(text);

        assert!(report.questions.is_empty());
        assert_eq!(report.pass, Some(ParsePass::Fallback));
        assert!(report.outcomes.is_empty());
        assert!(diagnostics
            .records()
            .iter()
            .any(|d| d.message == "no valid questions found"));
    }
}
