//! Multiple-choice question extraction
//!
//! This module turns the plain text of a quiz document into structured
//! questions and provides the strict check applied before submission.

pub mod diagnostics;
pub(crate) mod lines;
pub(crate) mod machine;
pub mod models;
pub mod parser;
pub(crate) mod sanitize;
pub mod validate;

pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, Diagnostics, TracingSink};
pub use lines::{CORRECTNESS_GLYPHS, OPTION_SLOTS};
pub use models::*;
pub use parser::{QuizDocumentParser, parse_quiz_text};
pub use sanitize::sanitize;
pub use validate::{Rejection, ValidationSummary, check_question, filter_valid};
