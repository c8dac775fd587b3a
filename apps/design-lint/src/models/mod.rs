//! Shared data models for lint input and output.

use serde::Serialize;
use std::path::PathBuf;

/// One source file read for a single run.
pub struct SourceFile {
    pub path: PathBuf,
    /// Repository-relative path, `/`-separated.
    pub rel: String,
    pub text: String,
}

/// What a rule reports for a file: the message and the 1-based line of the
/// first offending match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single violation of one rule in one file.
pub struct Violation {
    pub file: String,
    pub rule: String,
    pub message: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregated summary used by printers.
pub struct Summary {
    pub violations: usize,
    pub files: usize,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}

impl LintResult {
    pub fn new(violations: Vec<Violation>, files: usize) -> Self {
        let summary = Summary {
            violations: violations.len(),
            files,
            passed: violations.is_empty(),
        };
        LintResult {
            violations,
            summary,
        }
    }

    pub fn passed(&self) -> bool {
        self.summary.passed
    }
}
