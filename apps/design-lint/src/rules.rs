//! Design rules applied to each source file.
//!
//! Every rule is text-pattern based and independent of the others. A rule
//! reports at most one `Finding` per file; `RuleSet` runs all enabled rules
//! in a fixed order so reports are stable.
//!
//! - `icon-library`: references to disallowed icon packages.
//! - `hex-color`: hex color literals instead of semantic tokens.
//! - `arbitrary-value`: numeric Tailwind arbitrary values in `className`.
//! - `inline-style`: `style={{...}}` objects beyond transform/clipPath/CSS vars.

use crate::config::RuleConfig;
use crate::error::LintError;
use crate::models::{Finding, SourceFile};
use crate::utils::{is_in_dir, line_of};
use regex::Regex;

pub const ICON_LIBRARY: &str = "icon-library";
pub const HEX_COLOR: &str = "hex-color";
pub const ARBITRARY_VALUE: &str = "arbitrary-value";
pub const INLINE_STYLE: &str = "inline-style";

/// All rule ids in evaluation order.
pub const RULE_IDS: [&str; 4] = [ICON_LIBRARY, HEX_COLOR, ARBITRARY_VALUE, INLINE_STYLE];

/// A design rule evaluated against one file's text.
pub trait Rule: Send + Sync {
    /// Stable identifier used in reports and `rules.disabled`.
    fn id(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Check one file; `None` when the file complies.
    fn check(&self, file: &SourceFile) -> Option<Finding>;
}

// Patterns below are constant and covered by tests; a failure here is a
// programming error, not a runtime condition. Word boundaries and digits are
// ASCII-only (`(?-u:\b)`, `[0-9]`) so a non-ASCII letter still ends a token.
fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// A word boundary only makes sense next to a word character; `@scope/pkg`
/// starts with a non-word char, so the boundary is dropped on that side.
fn bounded(word: &str) -> String {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut out = String::new();
    if word.chars().next().is_some_and(is_word) {
        out.push_str(r"(?-u:\b)");
    }
    out.push_str(&regex::escape(word));
    if word.chars().last().is_some_and(is_word) {
        out.push_str(r"(?-u:\b)");
    }
    out
}

fn alternation(words: &[String]) -> String {
    words.iter().map(|w| bounded(w)).collect::<Vec<_>>().join("|")
}

fn user_pattern(pattern: String) -> Result<Regex, LintError> {
    Regex::new(&pattern).map_err(|e| LintError::Config {
        path: "<rules>".into(),
        message: e.to_string(),
    })
}

pub struct IconLibraryRule {
    packages: Vec<(String, Regex)>,
    preferred: String,
}

impl IconLibraryRule {
    pub fn new(cfg: &RuleConfig) -> Result<Self, LintError> {
        let packages = cfg
            .icon_packages
            .iter()
            .map(|p| Ok((p.clone(), user_pattern(bounded(p))?)))
            .collect::<Result<Vec<_>, LintError>>()?;
        Ok(IconLibraryRule {
            packages,
            preferred: cfg.icon_library.clone(),
        })
    }
}

impl Rule for IconLibraryRule {
    fn id(&self) -> &'static str {
        ICON_LIBRARY
    }

    fn description(&self) -> &'static str {
        "Icons must come from the approved icon library."
    }

    fn check(&self, file: &SourceFile) -> Option<Finding> {
        // Any mention counts: `from "pkg"`, `require('pkg')`, `pkg/icons`.
        self.packages.iter().find_map(|(pkg, re)| {
            re.find(&file.text).map(|m| Finding {
                message: format!(
                    "Disallowed icon import: use {} (no {}).",
                    self.preferred, pkg
                ),
                line: line_of(&file.text, m.start()),
            })
        })
    }
}

pub struct HexColorRule {
    hex: Regex,
}

impl HexColorRule {
    pub fn new() -> Self {
        HexColorRule {
            hex: re(r"#(?:[0-9a-fA-F]{3}){1,2}(?-u:\b)"),
        }
    }
}

impl Default for HexColorRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for HexColorRule {
    fn id(&self) -> &'static str {
        HEX_COLOR
    }

    fn description(&self) -> &'static str {
        "Colors must use semantic tokens, not hex literals."
    }

    fn check(&self, file: &SourceFile) -> Option<Finding> {
        self.hex.find(&file.text).map(|m| Finding {
            message: "Hardcoded hex color found. Use semantic tokens (bg-*, text-*, border-*)."
                .to_string(),
            line: line_of(&file.text, m.start()),
        })
    }
}

pub struct ArbitraryValueRule {
    allow_dirs: Vec<String>,
    class_value: Regex,
}

impl ArbitraryValueRule {
    pub fn new(cfg: &RuleConfig) -> Self {
        ArbitraryValueRule {
            allow_dirs: cfg.allow_arbitrary_in.clone(),
            // A bracket group must hold a digit: `w-[300px]`, `leading-[1.1]`.
            // Selector variants like `data-[state=active]:` carry none.
            class_value: re(
                r#"(?-u:\b)className\s*=\s*["'][^"']*\[[^"'\]]*[0-9][^"'\]]*\][^"']*["']"#,
            ),
        }
    }
}

impl Rule for ArbitraryValueRule {
    fn id(&self) -> &'static str {
        ARBITRARY_VALUE
    }

    fn description(&self) -> &'static str {
        "No numeric Tailwind arbitrary values outside allow-listed directories."
    }

    fn check(&self, file: &SourceFile) -> Option<Finding> {
        if self.allow_dirs.iter().any(|d| is_in_dir(&file.rel, d)) {
            return None;
        }
        self.class_value.find(&file.text).map(|m| Finding {
            message: "Tailwind arbitrary numeric value found in className. Use the Tailwind scale."
                .to_string(),
            line: line_of(&file.text, m.start()),
        })
    }
}

/// Style allow-list entry: always matches its literal path; also matches as
/// a glob when it parses as one.
struct AllowedFile {
    literal: String,
    pattern: Option<glob::Pattern>,
}

impl AllowedFile {
    fn new(entry: &str) -> Self {
        AllowedFile {
            literal: entry.to_string(),
            pattern: glob::Pattern::new(entry).ok(),
        }
    }

    fn matches(&self, rel: &str) -> bool {
        rel == self.literal || self.pattern.as_ref().is_some_and(|p| p.matches(rel))
    }
}

pub struct InlineStyleRule {
    allow_files: Vec<AllowedFile>,
    style_object: Regex,
    block_comment: Regex,
    disallowed_prop: Option<Regex>,
    permitted: Vec<Regex>,
    separators: Regex,
    identifier: Regex,
}

impl InlineStyleRule {
    pub fn new(cfg: &RuleConfig) -> Result<Self, LintError> {
        let allow_files = cfg
            .allow_style_files
            .iter()
            .map(|p| AllowedFile::new(p))
            .collect();
        let disallowed_prop = if cfg.disallowed_style_props.is_empty() {
            None
        } else {
            Some(user_pattern(format!(
                "(?:{})",
                alternation(&cfg.disallowed_style_props)
            ))?)
        };
        Ok(InlineStyleRule {
            allow_files,
            style_object: re(r"(?s)(?-u:\b)style\s*=\s*\{\{(.*?)\}\}"),
            block_comment: re(r"(?s)/\*.*?\*/"),
            disallowed_prop,
            permitted: vec![
                re(r"(?-u:\b)transform(?-u:\b)\s*(?::[^,}]+)?"),
                re(r"(?-u:\b)clipPath(?-u:\b)\s*(?::[^,}]+)?"),
                re(r#"["']--[a-zA-Z0-9_-]+["']\s*:\s*[^,}]+"#),
                re(r"(?-u:\b)--[a-zA-Z0-9_-]+(?-u:\b)\s*:\s*[^,}]+"),
            ],
            separators: re(r"[,{}\s]"),
            identifier: re(r"[a-zA-Z_$]"),
        })
    }

    fn is_allowed_file(&self, rel: &str) -> bool {
        self.allow_files.iter().any(|p| p.matches(rel))
    }

    /// A style body is acceptable when it names no disallowed property and
    /// nothing identifier-like survives stripping the permitted entries.
    pub fn body_allowed(&self, raw: &str) -> bool {
        let body = self.block_comment.replace_all(raw, "");
        if let Some(bad) = self.disallowed_prop.as_ref() {
            if bad.is_match(&body) {
                return false;
            }
        }
        let mut rest = body.into_owned();
        for p in &self.permitted {
            rest = p.replace_all(&rest, "").into_owned();
        }
        let rest = self.separators.replace_all(&rest, "");
        !self.identifier.is_match(&rest)
    }
}

impl Rule for InlineStyleRule {
    fn id(&self) -> &'static str {
        INLINE_STYLE
    }

    fn description(&self) -> &'static str {
        "Inline styles only for transform/clipPath motion and CSS variables."
    }

    fn check(&self, file: &SourceFile) -> Option<Finding> {
        if self.is_allowed_file(&file.rel) {
            return None;
        }
        // Every occurrence is judged; the first failing one locates the report.
        let first_bad = self
            .style_object
            .captures_iter(&file.text)
            .filter_map(|c| {
                let whole = c.get(0)?;
                let body = c.get(1).map_or("", |m| m.as_str());
                (!self.body_allowed(body)).then_some(whole.start())
            })
            .next()?;
        Some(Finding {
            message: "Inline styles found. Prefer tokens/classes; allow only transform-only motion styles."
                .to_string(),
            line: line_of(&file.text, first_bad),
        })
    }
}

/// Enabled rules in evaluation order.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Build every rule not listed in `cfg.disabled`. Unknown ids in
    /// `disabled` are a config error.
    pub fn from_config(cfg: &RuleConfig) -> Result<Self, LintError> {
        if let Some(unknown) = cfg.disabled.iter().find(|d| !RULE_IDS.contains(&d.as_str())) {
            return Err(LintError::Config {
                path: "<rules.disabled>".into(),
                message: format!(
                    "unknown rule id '{}' (expected one of: {})",
                    unknown,
                    RULE_IDS.join(", ")
                ),
            });
        }
        let all: Vec<Box<dyn Rule>> = vec![
            Box::new(IconLibraryRule::new(cfg)?),
            Box::new(HexColorRule::new()),
            Box::new(ArbitraryValueRule::new(cfg)),
            Box::new(InlineStyleRule::new(cfg)?),
        ];
        let rules = all
            .into_iter()
            .filter(|r| !cfg.is_disabled(r.id()))
            .collect();
        Ok(RuleSet { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Run every rule against `file`, in order, without short-circuiting.
    pub fn check(&self, file: &SourceFile) -> Vec<(&'static str, Finding)> {
        self.rules
            .iter()
            .filter_map(|r| r.check(file).map(|f| (r.id(), f)))
            .collect()
    }
}
