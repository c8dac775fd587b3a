//! Fatal errors that abort a lint run.
//!
//! Violations are not errors: they are the normal result of a scan and end
//! up in `LintResult`. Anything here means the scan itself could not finish.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured source root does not exist.
    #[error("source root not found: {}", .0.display())]
    MissingRoot(PathBuf),

    /// Directory traversal failed (permissions, vanished entries, loops).
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The configuration file exists but is not usable.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Unknown `--output` / `output =` value.
    #[error("unknown output mode '{0}' (expected human|json)")]
    InvalidOutput(String),
}

impl LintError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }
}
