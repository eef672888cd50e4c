//! Integration tests for the CLI surface (help, version, completions).

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{run_codepack_in, workspace};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let (_dir, root) = workspace();
    let (stdout, _stderr, exit_code) = run_codepack_in(&root, &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--roots"));
    assert!(stdout.contains("--skip"));
    assert!(stdout.contains("--git"));
    assert!(stdout.contains("--ext"));
}

#[test]
fn version_contains_package_version() {
    let (_dir, root) = workspace();
    let (stdout, _stderr, exit_code) = run_codepack_in(&root, &["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("codepack"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_documents_git_mode() {
    Command::cargo_bin("codepack")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git status --porcelain"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_generate_to_stdout() {
    let (_dir, root) = workspace();
    let (stdout, _stderr, exit_code) = run_codepack_in(&root, &["--completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("codepack"));
    assert!(!stdout.trim().is_empty());
}

// ============================================================================
// Argument Errors
// ============================================================================

#[test]
fn unknown_flag_is_a_usage_error() {
    let (_dir, root) = workspace();
    let (_stdout, stderr, exit_code) = run_codepack_in(&root, &["--definitely-not-a-flag"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--definitely-not-a-flag"));
}
