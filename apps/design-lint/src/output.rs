//! Report rendering for lint results.
//!
//! Supports `human` (default) and `json`. Human output sends the success
//! line to stdout and the failure listing to stderr; JSON always goes to
//! stdout with a top-level summary.

use crate::config::OutputMode;
use crate::models::LintResult;
use crate::utils::colors_enabled;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

pub const PASSED: &str = "design-lint passed.";
pub const FAILED: &str = "design-lint failed:";

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: OutputMode) {
    match output {
        OutputMode::Json => println!("{}", compose_lint_json(res)),
        OutputMode::Human => {
            let color = colors_enabled();
            if res.passed() {
                if color {
                    println!("{}", PASSED.green().bold());
                } else {
                    println!("{PASSED}");
                }
            } else {
                let header = if color {
                    FAILED.red().bold().to_string()
                } else {
                    FAILED.to_string()
                };
                eprintln!("{}\n{}", header, compose_violation_lines(res));
            }
        }
    }
}

/// One `- <file>: <message>` line per violation, in report order.
pub fn compose_violation_lines(res: &LintResult) -> String {
    res.violations
        .iter()
        .map(|v| format!("- {}: {}", v.file, v.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full uncolored human report, as printed on success or failure.
pub fn compose_human(res: &LintResult) -> String {
    if res.passed() {
        PASSED.to_string()
    } else {
        format!("{}\n{}", FAILED, compose_violation_lines(res))
    }
}

/// Compose lint JSON text (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> String {
    // LintResult holds only strings and integers; serialization cannot fail.
    let value: JsonVal = serde_json::to_value(res).unwrap_or(JsonVal::Null);
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
