//! Quiz-creation request body
//!
//! Only questions that pass the strict check are included. The body is what
//! the course backend's quiz-creation endpoint accepts; sending it is left to
//! the caller.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::quiz::{ParsedQuestion, Rejection, filter_valid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub questions: Vec<ParsedQuestion>,
}

/// Descriptive fields supplied alongside the parsed questions
#[derive(Debug, Clone, Default)]
pub struct QuizDetails {
    pub title: String,
    pub description: String,
    pub course_id: Option<String>,
}

impl QuizPayload {
    /// Build a payload from parsed questions, dropping any that fail the
    /// strict check. The rejected indices are returned for reporting.
    pub fn build(
        details: QuizDetails,
        questions: Vec<ParsedQuestion>,
    ) -> Result<(Self, Vec<(usize, Rejection)>), PayloadError> {
        let title = details.title.trim().to_string();
        if title.is_empty() {
            return Err(PayloadError::MissingTitle);
        }

        let summary = filter_valid(questions);
        if summary.accepted.is_empty() {
            return Err(PayloadError::NoValidQuestions);
        }

        let course_id = details
            .course_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Ok((
            QuizPayload {
                title,
                description: details.description.trim().to_string(),
                course_id,
                questions: summary.accepted,
            },
            summary.rejected,
        ))
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
