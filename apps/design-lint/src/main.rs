//! design-lint CLI binary entry point.
//! Resolves configuration, delegates to the library and maps results to
//! exit codes: 0 clean, 1 violations, 2 fatal error.

use clap::Parser;
use design_lint::cli::{Cli, Commands, LintArgs};
use design_lint::config::{self, OutputMode, RuleConfig};
use design_lint::error::LintError;
use design_lint::rules::RuleSet;
use design_lint::utils::{error_prefix, info_prefix, note_prefix};
use design_lint::{lint, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.cmd.unwrap_or(Commands::Lint(LintArgs::default())) {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lint(args) => run_lint(args),
        Commands::Rules { repo_root, config } => list_rules(repo_root, config),
    };
    result.unwrap_or_else(|e| {
        eprintln!("{} {}", error_prefix(), e);
        ExitCode::from(2)
    })
}

fn run_lint(args: LintArgs) -> Result<ExitCode, LintError> {
    let eff = config::resolve_effective(
        args.repo_root.as_deref(),
        args.config.as_deref(),
        args.output.as_deref(),
    )?;
    if eff.output == OutputMode::Human {
        if eff.config_path.is_none() {
            eprintln!(
                "{} No design-lint.toml found; using defaults.",
                note_prefix()
            );
        }
        if !eff.rules.disabled.is_empty() {
            eprintln!(
                "{} Disabled rules: [{}]",
                info_prefix(),
                eff.rules.disabled.join(", ")
            );
        }
    }
    let result = lint::run_lint(&eff.repo_root, &eff.rules)?;
    output::print_lint(&result, eff.output);
    Ok(if result.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn list_rules(
    repo_root: Option<String>,
    config_file: Option<String>,
) -> Result<ExitCode, LintError> {
    let eff = config::resolve_effective(repo_root.as_deref(), config_file.as_deref(), None)?;
    // Build the full set so disabled rules are listed too.
    let all = RuleSet::from_config(&RuleConfig {
        disabled: Vec::new(),
        ..eff.rules.clone()
    })?;
    for rule in all.iter() {
        let state = if eff.rules.is_disabled(rule.id()) {
            "off"
        } else {
            "on"
        };
        println!("{:<16} {:<4} {}", rule.id(), state, rule.description());
    }
    Ok(ExitCode::SUCCESS)
}
