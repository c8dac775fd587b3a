//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "design-lint",
    version,
    about = "Design guardrails for component sources",
    long_about = "design-lint: scan component sources for icon-library, hex-color, Tailwind arbitrary-value and inline-style violations.\n\nConfiguration precedence: CLI > design-lint.toml > defaults.",
    after_help = "Examples:\n  design-lint\n  design-lint lint --output json\n  design-lint lint --repo-root site --config conf/design-lint.toml\n  design-lint rules"
)]
/// Top-level CLI options and subcommands. Without a subcommand, `lint` runs
/// with its defaults.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current design-lint version.")]
    Version,
    /// Run the design rules
    #[command(
        about = "Run lint checks",
        long_about = "Walk the configured source roots and apply every enabled rule. Exits 1 on violations, 2 on fatal errors.",
        after_help = "Examples:\n  design-lint lint\n  design-lint lint --output json"
    )]
    Lint(LintArgs),
    /// List available rules
    #[command(
        about = "List rules",
        long_about = "Print every rule id with its description and whether it is enabled."
    )]
    Rules {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Config file, relative to the repository root")]
        config: Option<String>,
    },
}

#[derive(Args, Default)]
pub struct LintArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Config file, relative to the repository root (default: design-lint.{toml,yaml,yml})")]
    pub config: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["design-lint"]).unwrap();
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn test_lint_flags() {
        let cli = Cli::try_parse_from([
            "design-lint",
            "lint",
            "--repo-root",
            "site",
            "--output",
            "json",
        ])
        .unwrap();
        match cli.cmd {
            Some(Commands::Lint(args)) => {
                assert_eq!(args.repo_root.as_deref(), Some("site"));
                assert_eq!(args.output.as_deref(), Some("json"));
                assert!(args.config.is_none());
            }
            _ => panic!("expected lint"),
        }
    }
}
