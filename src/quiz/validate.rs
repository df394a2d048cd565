//! Strict acceptance check applied before questions are submitted
//!
//! The parser is lenient: it pads options and defaults the answer. A question
//! is only accepted into a quiz when all four options are filled in and the
//! correct answer is one of them.

use super::lines::OPTION_SLOTS;
use super::models::ParsedQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyQuestion,
    WrongOptionCount,
    EmptyOption,
    AnswerNotAmongOptions,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rejection::EmptyQuestion => "question text is empty",
            Rejection::WrongOptionCount => "question does not have exactly four options",
            Rejection::EmptyOption => "one or more options are empty",
            Rejection::AnswerNotAmongOptions => "correct answer is not one of the options",
        };
        f.write_str(text)
    }
}

pub fn check_question(question: &ParsedQuestion) -> Result<(), Rejection> {
    if question.question.trim().is_empty() {
        return Err(Rejection::EmptyQuestion);
    }
    if question.options.len() != OPTION_SLOTS {
        return Err(Rejection::WrongOptionCount);
    }
    if question.options.iter().any(|option| option.trim().is_empty()) {
        return Err(Rejection::EmptyOption);
    }
    if !question.options.contains(&question.correct_answer) {
        return Err(Rejection::AnswerNotAmongOptions);
    }
    Ok(())
}

/// Questions split into accepted and rejected (with the index they had)
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    pub accepted: Vec<ParsedQuestion>,
    pub rejected: Vec<(usize, Rejection)>,
}

pub fn filter_valid(questions: Vec<ParsedQuestion>) -> ValidationSummary {
    let mut summary = ValidationSummary::default();

    for (index, question) in questions.into_iter().enumerate() {
        match check_question(&question) {
            Ok(()) => summary.accepted.push(question),
            Err(rejection) => summary.rejected.push((index, rejection)),
        }
    }

    summary
}
