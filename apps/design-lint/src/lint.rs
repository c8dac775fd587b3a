//! Lint runner: discover sources, apply the rule set, aggregate violations.
//!
//! Files are linted in parallel but results keep discovery order, then rule
//! order within a file, so repeated runs over the same tree print the same
//! report.

use crate::config::RuleConfig;
use crate::error::LintError;
use crate::models::{LintResult, SourceFile, Violation};
use crate::rules::RuleSet;
use crate::utils::rel_path;
use crate::walk::discover;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Read one file. Invalid UTF-8 is decoded lossily rather than rejected.
pub fn read_source(repo_root: &Path, path: PathBuf) -> Result<SourceFile, LintError> {
    let bytes = fs::read(&path).map_err(|e| LintError::io(&path, e))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let rel = rel_path(repo_root, &path);
    Ok(SourceFile { path, rel, text })
}

/// Apply every enabled rule to one file.
pub fn lint_file(rules: &RuleSet, file: &SourceFile) -> Vec<Violation> {
    rules
        .check(file)
        .into_iter()
        .map(|(rule, f)| Violation {
            file: file.rel.clone(),
            rule: rule.to_string(),
            message: f.message,
            line: f.line,
        })
        .collect()
}

/// Lint every source file under the configured roots of `repo_root`.
///
/// Any I/O failure aborts the run; there is no partial result.
pub fn run_lint(repo_root: &Path, cfg: &RuleConfig) -> Result<LintResult, LintError> {
    let rules = RuleSet::from_config(cfg)?;
    let paths = discover(repo_root, cfg)?;
    let files_count = paths.len();

    let per_file: Vec<Vec<Violation>> = paths
        .into_par_iter()
        .map(|path| {
            let file = read_source(repo_root, path)?;
            Ok(lint_file(&rules, &file))
        })
        .collect::<Result<_, LintError>>()?;

    let violations = per_file.into_iter().flatten().collect();
    Ok(LintResult::new(violations, files_count))
}
