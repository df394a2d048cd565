//! Block state machine
//!
//! A block is fed to [`BlockMachine`] one line at a time:
//!
//! ```text
//! AwaitQuestion --first line--> CollectingOptions --"Answer:" as last line--> AwaitAnswerLine
//!                                      |                                            |
//!                                      +------------------ finish ------------------+--> Done
//! ```
//!
//! Answer precedence is fixed: an answer line overrides any correctness
//! marker, a later marker overrides an earlier one, and the first option is the
//! default when neither named an answer.

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::lines::{
    AnswerReference, LineToken, OPTION_SLOTS, classify_line, parse_answer_reference,
    strip_question_label,
};
use super::models::{AnswerSource, BlockOutcome, ParsedQuestion, SkipReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockState {
    AwaitQuestion,
    CollectingOptions,
    AwaitAnswerLine,
    Done,
}

/// Whether a trailing `Answer:` line is recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnswerLineMode {
    Recognize,
    Ignore,
}

pub(crate) struct BlockMachine<'s, S: DiagnosticSink + ?Sized> {
    block: usize,
    mode: AnswerLineMode,
    state: BlockState,
    question: String,
    options: Vec<String>,
    answer: Option<(String, AnswerSource)>,
    pending_answer_line: Option<String>,
    marked_lines: usize,
    sink: &'s mut S,
}

impl<'s, S: DiagnosticSink + ?Sized> BlockMachine<'s, S> {
    pub(crate) fn new(block: usize, mode: AnswerLineMode, sink: &'s mut S) -> Self {
        Self {
            block,
            mode,
            state: BlockState::AwaitQuestion,
            question: String::new(),
            options: Vec::new(),
            answer: None,
            pending_answer_line: None,
            marked_lines: 0,
            sink,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> BlockState {
        self.state
    }

    /// Feed the next trimmed line; `is_last` marks the block's final line
    pub(crate) fn feed(&mut self, line: &str, is_last: bool) {
        match self.state {
            BlockState::AwaitQuestion => {
                self.question = strip_question_label(line);
                self.state = BlockState::CollectingOptions;
            }
            BlockState::CollectingOptions => {
                let answer_allowed = is_last && self.mode == AnswerLineMode::Recognize;
                match classify_line(line, answer_allowed) {
                    LineToken::Option {
                        marker,
                        text,
                        marked_correct,
                    } => {
                        if text.is_empty() {
                            self.sink.record(Diagnostic::debug(
                                Some(self.block),
                                format!("option {marker} has no text"),
                            ));
                        }
                        if marked_correct {
                            self.marked_lines += 1;
                            self.answer = Some((text.clone(), AnswerSource::Marker));
                        }
                        self.options.push(text);
                    }
                    LineToken::Answer(content) => {
                        self.pending_answer_line = Some(content);
                        self.state = BlockState::AwaitAnswerLine;
                    }
                    LineToken::Text => {}
                }
            }
            BlockState::AwaitAnswerLine | BlockState::Done => {
                self.sink.record(Diagnostic::debug(
                    Some(self.block),
                    format!("line after answer line ignored: {line}"),
                ));
            }
        }
    }

    /// Settle the answer, normalize the options and produce the outcome
    pub(crate) fn finish(mut self) -> BlockOutcome {
        if self.state == BlockState::AwaitAnswerLine {
            if let Some(content) = self.pending_answer_line.take() {
                self.apply_answer_line(&content);
            }
        }
        self.state = BlockState::Done;

        if self.marked_lines > 1 {
            self.sink.record(Diagnostic::warn(
                Some(self.block),
                format!(
                    "{} options marked correct; the last marked option was kept",
                    self.marked_lines
                ),
            ));
        }

        if self.answer.is_none() {
            if let Some(first) = self.options.first() {
                self.answer = Some((first.clone(), AnswerSource::DefaultFirst));
            }
        }

        if self.options.len() > OPTION_SLOTS {
            self.sink.record(Diagnostic::info(
                Some(self.block),
                format!(
                    "{} options found; only the first {OPTION_SLOTS} were kept",
                    self.options.len()
                ),
            ));
        }
        self.options.resize(OPTION_SLOTS, String::new());

        if self.question.is_empty() {
            return self.skip(SkipReason::EmptyQuestion);
        }

        let Some((correct_answer, source)) = self.answer.take() else {
            return self.skip(SkipReason::NoOptions);
        };

        if !self.options.contains(&correct_answer) {
            self.sink.record(Diagnostic::warn(
                Some(self.block),
                format!("correct answer '{correct_answer}' is not among the kept options"),
            ));
        }

        self.sink.record(Diagnostic::debug(
            Some(self.block),
            format!("parsed question '{}' ({source:?})", self.question),
        ));

        BlockOutcome::Parsed {
            block: self.block,
            question: ParsedQuestion {
                question: self.question,
                options: self.options,
                correct_answer,
            },
            source,
        }
    }

    fn apply_answer_line(&mut self, content: &str) {
        let resolved = match parse_answer_reference(content) {
            AnswerReference::Letter(index) | AnswerReference::Digit(index) => {
                let option = self.options.get(index).cloned();
                if option.is_none() {
                    self.sink.record(Diagnostic::info(
                        Some(self.block),
                        format!(
                            "answer line '{content}' points past the {} collected option(s)",
                            self.options.len()
                        ),
                    ));
                }
                option
            }
            AnswerReference::Literal(text) => {
                let option = self.options.iter().find(|option| **option == text).cloned();
                if option.is_none() {
                    self.sink.record(Diagnostic::info(
                        Some(self.block),
                        format!("answer line '{content}' matches no option; ignored"),
                    ));
                }
                option
            }
        };

        if let Some(option) = resolved {
            self.answer = Some((option, AnswerSource::AnswerLine));
        }
    }

    fn skip(mut self, reason: SkipReason) -> BlockOutcome {
        self.sink.record(Diagnostic::debug(
            Some(self.block),
            format!("block skipped: {reason}"),
        ));
        BlockOutcome::Skipped {
            block: self.block,
            reason,
        }
    }
}

/// Run a whole block through the machine.
///
/// `lines` must already be trimmed and free of blank entries.
pub(crate) fn parse_block<S: DiagnosticSink + ?Sized>(
    block: usize,
    lines: &[&str],
    mode: AnswerLineMode,
    sink: &mut S,
) -> BlockOutcome {
    if lines.len() < 2 {
        sink.record(Diagnostic::debug(
            Some(block),
            format!("block skipped: {}", SkipReason::TooFewLines),
        ));
        return BlockOutcome::Skipped {
            block,
            reason: SkipReason::TooFewLines,
        };
    }

    let mut machine = BlockMachine::new(block, mode, sink);
    let last = lines.len() - 1;
    for (index, line) in lines.iter().enumerate() {
        machine.feed(line, index == last);
    }
    machine.finish()
}

#[cfg(test)]
mod tests {
    use super::super::diagnostics::{DiagnosticLevel, Diagnostics};
    use super::*;

    fn run(lines: &[&str]) -> BlockOutcome {
        let mut sink = Diagnostics::new();
        parse_block(0, lines, AnswerLineMode::Recognize, &mut sink)
    }

    fn parsed(outcome: &BlockOutcome) -> (&ParsedQuestion, AnswerSource) {
        match outcome {
            BlockOutcome::Parsed {
                question, source, ..
            } => (question, *source),
            other => panic!("expected a parsed block, got {other:?}"),
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut sink = Diagnostics::new();
        let mut machine = BlockMachine::new(0, AnswerLineMode::Recognize, &mut sink);
        assert_eq!(machine.state(), BlockState::AwaitQuestion);

        machine.feed("Capital of France?", false);
        assert_eq!(machine.state(), BlockState::CollectingOptions);

        machine.feed("A) Paris", false);
        assert_eq!(machine.state(), BlockState::CollectingOptions);

        machine.feed("Answer: A", true);
        assert_eq!(machine.state(), BlockState::AwaitAnswerLine);

        let outcome = machine.finish();
        let (question, source) = parsed(&outcome);
        assert_eq!(question.correct_answer, "Paris");
        assert_eq!(source, AnswerSource::AnswerLine);
    }

    #[test]
    fn test_marker_sets_answer() {
        let outcome = run(&["Question?", "A) opt1", "B) opt2*", "C) opt3", "D) opt4"]);
        let (question, source) = parsed(&outcome);
        assert_eq!(question.options, vec!["opt1", "opt2", "opt3", "opt4"]);
        assert_eq!(question.correct_answer, "opt2");
        assert_eq!(source, AnswerSource::Marker);
    }

    #[test]
    fn test_last_marker_wins_and_warns() {
        let mut sink = Diagnostics::new();
        let outcome = parse_block(
            3,
            &["Pick one?", "A) one ✓", "B) two", "C) three ✓"],
            AnswerLineMode::Recognize,
            &mut sink,
        );
        let (question, _) = parsed(&outcome);
        assert_eq!(question.correct_answer, "three");
        assert_eq!(sink.at_least(DiagnosticLevel::Warn).count(), 1);
        assert_eq!(sink.for_block(3).count(), sink.len());
    }

    #[test]
    fn test_answer_line_overrides_marker() {
        let outcome = run(&["Capital?", "A) Paris ✓", "B) London", "Answer: B"]);
        let (question, source) = parsed(&outcome);
        assert_eq!(question.correct_answer, "London");
        assert_eq!(source, AnswerSource::AnswerLine);
    }

    #[test]
    fn test_out_of_range_answer_line_falls_back() {
        let outcome = run(&["Capital?", "A) Paris", "B) London", "Answer: D"]);
        let (question, source) = parsed(&outcome);
        assert_eq!(question.correct_answer, "Paris");
        assert_eq!(source, AnswerSource::DefaultFirst);
    }

    #[test]
    fn test_literal_answer_line() {
        let outcome = run(&["Capital?", "A) Paris", "B) London", "Answer: London"]);
        assert_eq!(parsed(&outcome).0.correct_answer, "London");

        let outcome = run(&["Capital?", "A) Paris", "B) London", "Answer: london"]);
        assert_eq!(parsed(&outcome).0.correct_answer, "Paris");
    }

    #[test]
    fn test_answer_line_ignored_when_not_recognized() {
        let mut sink = Diagnostics::new();
        let outcome = parse_block(
            0,
            &["Capital?", "A) Paris", "B) London", "Answer: B"],
            AnswerLineMode::Ignore,
            &mut sink,
        );
        let (question, source) = parsed(&outcome);
        assert_eq!(question.correct_answer, "Paris");
        assert_eq!(source, AnswerSource::DefaultFirst);
    }

    #[test]
    fn test_answer_line_in_the_middle_is_plain_text() {
        let outcome = run(&["Capital?", "Answer: B", "A) Paris", "B) London"]);
        let (question, _) = parsed(&outcome);
        assert_eq!(question.options, vec!["Paris", "London", "", ""]);
        assert_eq!(question.correct_answer, "Paris");
    }

    #[test]
    fn test_skip_reasons() {
        assert!(matches!(
            run(&["Only a question?"]),
            BlockOutcome::Skipped {
                reason: SkipReason::TooFewLines,
                ..
            }
        ));
        assert!(matches!(
            run(&["Question 1:", "A) Paris"]),
            BlockOutcome::Skipped {
                reason: SkipReason::EmptyQuestion,
                ..
            }
        ));
        assert!(matches!(
            run(&["Capital?", "Paris is nice", "So is Rome"]),
            BlockOutcome::Skipped {
                reason: SkipReason::NoOptions,
                ..
            }
        ));
        assert!(matches!(
            run(&["Capital?", "Answer: A"]),
            BlockOutcome::Skipped {
                reason: SkipReason::NoOptions,
                ..
            }
        ));
    }
}
