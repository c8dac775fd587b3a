//! Source discovery: recursive walk with pruning, then extension filtering.

use crate::config::RuleConfig;
use crate::error::LintError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every file under `root`, skipping entries whose name is in `ignore_dirs`.
///
/// Ignored directories are pruned before descent. Entries come back in
/// file-name order; symlinks are not followed. The first traversal error
/// aborts the walk.
pub fn walk(root: &Path, ignore_dirs: &[String]) -> Result<Vec<PathBuf>, LintError> {
    if !root.is_dir() {
        return Err(LintError::MissingRoot(root.to_path_buf()));
    }
    let mut out = Vec::new();
    let entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !ignore_dirs.iter().any(|d| e.file_name() == d.as_str())
        });
    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            out.push(entry.into_path());
        }
    }
    Ok(out)
}

/// Whether `path` carries one of the allowed source extensions.
pub fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x == ext))
}

/// Walk every configured source root in order and keep source files.
pub fn discover(repo_root: &Path, cfg: &RuleConfig) -> Result<Vec<PathBuf>, LintError> {
    let mut files = Vec::new();
    for root in &cfg.source_roots {
        let found = walk(&repo_root.join(root), &cfg.ignore_dirs)?;
        files.extend(
            found
                .into_iter()
                .filter(|p| is_source_file(p, &cfg.extensions)),
        );
    }
    Ok(files)
}
