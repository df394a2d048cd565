//! Parser diagnostics
//!
//! The parser never fails on a malformed block; it reports what it did through
//! a [`DiagnosticSink`] handed in by the caller. [`Diagnostics`] collects the
//! records so they can be returned next to the parse result, and
//! [`TracingSink`] forwards them to `tracing`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// Block index the record refers to, if any
    pub block: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn debug(block: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Debug,
            block,
            message: message.into(),
        }
    }

    pub fn info(block: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            block,
            message: message.into(),
        }
    }

    pub fn warn(block: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warn,
            block,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.level {
            DiagnosticLevel::Debug => "debug",
            DiagnosticLevel::Info => "info",
            DiagnosticLevel::Warn => "warn",
        };
        match self.block {
            Some(block) => write!(f, "[{level}] block {}: {}", block + 1, self.message),
            None => write!(f, "[{level}] {}", self.message),
        }
    }
}

/// Receiver for parser diagnostics
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

/// In-memory collector returned alongside a parse result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records at or above `level`
    pub fn at_least(&self, level: DiagnosticLevel) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter(move |d| d.level >= level)
    }

    pub fn for_block(&self, block: usize) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter(move |d| d.block == Some(block))
    }
}

impl DiagnosticSink for Diagnostics {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }
}

/// Forwards every record to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Debug => debug!(block = ?diagnostic.block, "{}", diagnostic.message),
            DiagnosticLevel::Info => info!(block = ?diagnostic.block, "{}", diagnostic.message),
            DiagnosticLevel::Warn => warn!(block = ?diagnostic.block, "{}", diagnostic.message),
        }
    }
}
