//! End-to-end runs of the `design-lint` binary against temp repositories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, text: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, text).unwrap();
}

fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_design-lint"))
        .args(args)
        .current_dir(root)
        .env("NO_COLOR", "1")
        .output()
        .expect("spawn design-lint")
}

#[test]
fn test_icon_import_fails_with_listing() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "src/App.tsx", "import { Home } from \"lucide-react\";\n");

    let out = run(tmp.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(
        "design-lint failed:\n- src/App.tsx: Disallowed icon import: use @phosphor-icons/react (no lucide-react)."
    ));
    assert_eq!(stderr.matches("\n- ").count(), 1);
}

#[test]
fn test_clean_repo_passes() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "src/styles.css", "body { color: #000; }");

    let out = run(tmp.path(), &["lint"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "design-lint passed.");
}

#[test]
fn test_json_output_and_repeatable() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "src/a.tsx", "<div style={{ background: 'red' }} />");
    write(tmp.path(), "design-lint.toml", "output = \"json\"\n");

    let first = run(tmp.path(), &[]);
    let second = run(tmp.path(), &[]);
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.stdout, second.stdout);
    let v: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(v["violations"][0]["rule"], "inline-style");
    assert_eq!(v["summary"]["passed"], false);
}

#[test]
fn test_missing_root_is_fatal() {
    let tmp = tempdir().unwrap();
    let out = run(tmp.path(), &["lint"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("source root not found"));
}

#[test]
fn test_rules_listing_marks_disabled() {
    let tmp = tempdir().unwrap();
    write(
        tmp.path(),
        "design-lint.toml",
        "[rules]\ndisabled = [\"hex-color\"]\n",
    );
    let out = run(tmp.path(), &["rules"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.lines().any(|l| l.starts_with("hex-color") && l.contains(" off ")));
    assert!(stdout.lines().any(|l| l.starts_with("icon-library") && l.contains(" on ")));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_exits_fatal() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "src/b.tsx", "import X from 'lucide-react';");
    std::os::unix::fs::symlink(
        tmp.path().join("src/missing.tsx"),
        tmp.path().join("src/a.tsx"),
    )
    .unwrap();

    let out = run(tmp.path(), &["lint"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: failed to read"));
    assert!(!stderr.contains("design-lint failed:"));
}

#[test]
fn test_unknown_disabled_rule_exits_fatal() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "src/a.tsx", "export const ok = 1;");
    write(
        tmp.path(),
        "design-lint.toml",
        "[rules]\ndisabled = [\"hex-colour\"]\n",
    );
    let out = run(tmp.path(), &["lint"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown rule id 'hex-colour'"));
}
