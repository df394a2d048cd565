//! Document text extraction module
//!
//! This module reads Microsoft Word (.docx) documents and plain text files
//! and converts them into the raw, blank-line separated text the quiz parser
//! works on.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod numbering;
pub(crate) mod text;

pub use loader::{extract_docx_text, load_raw_text};
pub use models::*;
