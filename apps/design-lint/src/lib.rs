//! design-lint core library.
//!
//! Enforces visual conventions in component sources with text-pattern
//! rules: approved icon library, semantic color tokens, the Tailwind scale,
//! and transform-only inline styles.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Rule defaults, config-file discovery, effective settings.
//! - `walk`: Source discovery with directory pruning and extension filter.
//! - `rules`: The `Rule` trait and the built-in rules.
//! - `lint`: Run orchestration and aggregation.
//! - `models`: Source file, violation and result structs.
//! - `output`: Human/JSON printers.
//! - `error`: Fatal error type.
//! - `utils`: Diagnostic prefixes and path helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
pub mod walk;

pub use config::RuleConfig;
pub use error::LintError;
pub use lint::run_lint;
pub use models::{LintResult, Violation};
