//! Rule configuration and effective settings resolution.
//!
//! design-lint reads an optional `design-lint.toml|yaml|yml` from the
//! repository root (or the file passed via `--config`) and merges it with
//! CLI flags and built-in defaults to produce an `Effective` config.
//! Defaults:
//! - `walk.source_roots`: `["src"]`
//! - `walk.extensions`: `["ts", "tsx", "js", "jsx"]`
//! - `walk.ignore_dirs`: `["node_modules", "dist", ".git"]`
//! - `rules.allow_arbitrary_in`: `["src/components/ui"]`
//! - `rules.allow_style_files`: `["src/components/brand/GridPattern.tsx"]`
//! - `rules.icon_packages`: `["lucide-react"]`, preferred `@phosphor-icons/react`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::LintError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config file names probed at the repository root, in order.
pub const CONFIG_FILES: [&str; 3] = ["design-lint.toml", "design-lint.yaml", "design-lint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Traversal section under `[walk]`.
pub struct WalkCfg {
    pub source_roots: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub ignore_dirs: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule section under `[rules]`.
pub struct RulesCfg {
    pub disabled: Option<Vec<String>>,
    pub icon_packages: Option<Vec<String>>,
    pub icon_library: Option<String>,
    pub allow_arbitrary_in: Option<Vec<String>>,
    pub allow_style_files: Option<Vec<String>>,
    pub disallowed_style_props: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `design-lint.toml|yaml`.
pub struct DesignLintConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub walk: Option<WalkCfg>,
    #[serde(default)]
    pub rules: Option<RulesCfg>,
}

/// Resolved rule parameters. Built once per run and passed by reference.
///
/// Directory and file entries are repository-relative and `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub source_roots: Vec<String>,
    pub extensions: Vec<String>,
    pub ignore_dirs: Vec<String>,
    pub allow_arbitrary_in: Vec<String>,
    /// Glob patterns; a plain path matches itself.
    pub allow_style_files: Vec<String>,
    pub icon_packages: Vec<String>,
    pub icon_library: String,
    pub disallowed_style_props: Vec<String>,
    pub disabled: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            source_roots: strings(&["src"]),
            extensions: strings(&["ts", "tsx", "js", "jsx"]),
            ignore_dirs: strings(&["node_modules", "dist", ".git"]),
            // shadcn primitives keep their upstream arbitrary values
            allow_arbitrary_in: strings(&["src/components/ui"]),
            // GridPattern drives its effect through CSS variables
            allow_style_files: strings(&["src/components/brand/GridPattern.tsx"]),
            icon_packages: strings(&["lucide-react"]),
            icon_library: "@phosphor-icons/react".to_string(),
            disallowed_style_props: strings(&[
                "background",
                "color",
                "border",
                "boxShadow",
                "filter",
                "opacity",
            ]),
            disabled: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// Overlay values present in a config file on top of `self`.
    pub fn merged(mut self, cfg: &DesignLintConfig) -> Self {
        if let Some(w) = cfg.walk.as_ref() {
            if let Some(v) = w.source_roots.clone() {
                self.source_roots = v;
            }
            if let Some(v) = w.extensions.clone() {
                self.extensions = v
                    .into_iter()
                    .map(|e| e.trim_start_matches('.').to_string())
                    .collect();
            }
            if let Some(v) = w.ignore_dirs.clone() {
                self.ignore_dirs = v;
            }
        }
        if let Some(r) = cfg.rules.as_ref() {
            if let Some(v) = r.disabled.clone() {
                self.disabled = v;
            }
            if let Some(v) = r.icon_packages.clone() {
                self.icon_packages = v;
            }
            if let Some(v) = r.icon_library.clone() {
                self.icon_library = v;
            }
            if let Some(v) = r.allow_arbitrary_in.clone() {
                self.allow_arbitrary_in = v;
            }
            if let Some(v) = r.allow_style_files.clone() {
                self.allow_style_files = v;
            }
            if let Some(v) = r.disallowed_style_props.clone() {
                self.disallowed_style_props = v;
            }
        }
        self
    }

    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.disabled.iter().any(|d| d == rule_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(LintError::InvalidOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub output: OutputMode,
    pub rules: RuleConfig,
}

/// First `design-lint.*` config file present at `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Parse a config file; the format is chosen by extension (YAML for
/// `.yaml|.yml`, TOML otherwise).
pub fn load_config(path: &Path) -> Result<DesignLintConfig, LintError> {
    let s = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|e| LintError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    } else {
        toml::from_str(&s).map_err(|e| LintError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Resolve `Effective` by merging CLI flags, the config file, and defaults.
///
/// `cli_config` is resolved against the repository root when relative.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective, LintError> {
    let repo_root = PathBuf::from(cli_repo_root.unwrap_or("."));
    let config_path = match cli_config {
        Some(p) => Some(repo_root.join(p)),
        None => find_config(&repo_root),
    };
    let cfg = match config_path.as_ref() {
        Some(p) => load_config(p)?,
        None => DesignLintConfig::default(),
    };

    let output = match cli_output.map(str::to_string).or(cfg.output.clone()) {
        Some(s) => s.parse()?,
        None => OutputMode::Human,
    };
    let rules = RuleConfig::default().merged(&cfg);

    Ok(Effective {
        repo_root,
        config_path,
        output,
        rules,
    })
}
