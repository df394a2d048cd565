//! Text normalization shared by question and option extraction

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip control characters, collapse whitespace runs to a single space and trim.
///
/// Whitespace controls (tab, newline, carriage return) count as whitespace and
/// collapse into a space; every other control character is removed outright.
pub fn sanitize(text: &str) -> String {
    let printable: String = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();

    WHITESPACE_RUN
        .replace_all(&printable, " ")
        .trim()
        .to_string()
}
