//! Diagnostic prefixes and path helpers shared by the binary and library.

use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Whether stderr/stdout decorations should be colored.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.cyan().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Path of `path` relative to `root`, `/`-separated for stable output.
pub fn rel_path(root: &Path, path: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| PathBuf::from(path));
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// `rel` equals `dir` or lies beneath it. Component-wise, so `src/ui` does
/// not cover `src/uikit/x.tsx`.
pub fn is_in_dir(rel: &str, dir: &str) -> bool {
    let dir = dir.trim_end_matches('/');
    Path::new(rel).starts_with(Path::new(dir))
}

/// 1-based line number of byte offset `at` in `text`.
pub fn line_of(text: &str, at: usize) -> usize {
    text.as_bytes()[..at.min(text.len())]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_path_strips_root_and_normalizes() {
        let root = Path::new("./repo");
        let p = root.join("src").join("components").join("App.tsx");
        assert_eq!(rel_path(root, &p), "src/components/App.tsx");
    }

    #[test]
    fn test_is_in_dir_is_component_wise() {
        assert!(is_in_dir("src/components/ui/button.tsx", "src/components/ui"));
        assert!(is_in_dir("src/components/ui", "src/components/ui/"));
        assert!(!is_in_dir("src/components/uikit/x.tsx", "src/components/ui"));
        assert!(!is_in_dir("src/App.tsx", "src/components/ui"));
    }

    #[test]
    fn test_line_of() {
        let text = "a\nb\nc";
        assert_eq!(line_of(text, 0), 1);
        assert_eq!(line_of(text, 2), 2);
        assert_eq!(line_of(text, 4), 3);
        assert_eq!(line_of(text, 100), 3);
    }
}
