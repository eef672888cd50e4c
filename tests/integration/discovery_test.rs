//! Integration tests for filesystem discovery through the CLI.

use std::fs;

use crate::helpers::{run_codepack_in, workspace};

// ============================================================================
// Extension Filtering
// ============================================================================

#[test]
fn walk_defaults_to_python_extension() {
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "print()\n").unwrap();
    fs::write(root.join("readme.txt"), "hi\n").unwrap();

    let (stdout, _stderr, exit_code) = run_codepack_in(&root, &[".", "-o", "out.txt"]);

    assert_eq!(exit_code, 0, "stdout: {stdout}");
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("a.py"));
    assert!(!artifact.contains("readme.txt"));
}

#[test]
fn explicit_ext_widens_the_walk() {
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "x\n").unwrap();
    fs::write(root.join("b.toml"), "y = 1\n").unwrap();

    let (_stdout, _stderr, exit_code) =
        run_codepack_in(&root, &[".", "--ext", "py", "toml", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("a.py"));
    assert!(artifact.contains("b.toml"));
}

// ============================================================================
// Skip Patterns
// ============================================================================

#[test]
fn bare_skip_pattern_prunes_a_subtree() {
    let (_dir, root) = workspace();
    fs::create_dir(root.join("vendor")).unwrap();
    fs::write(root.join("vendor/hidden.py"), "x\n").unwrap();
    fs::write(root.join("main.py"), "y\n").unwrap();

    let (_stdout, _stderr, exit_code) =
        run_codepack_in(&root, &[".", "--skip", "vendor", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("main.py"));
    assert!(!artifact.contains("hidden.py"));
}

#[test]
fn default_skip_covers_node_modules() {
    let (_dir, root) = workspace();
    fs::create_dir(root.join("node_modules")).unwrap();
    fs::write(root.join("node_modules/dep.py"), "x\n").unwrap();
    fs::write(root.join("app.py"), "y\n").unwrap();

    let (_stdout, _stderr, exit_code) = run_codepack_in(&root, &[".", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("app.py"));
    assert!(!artifact.contains("dep.py"));
}

// ============================================================================
// Invalid Entries
// ============================================================================

#[test]
fn missing_root_reports_error_and_nonzero_exit() {
    let (_dir, root) = workspace();

    let (_stdout, stderr, exit_code) =
        run_codepack_in(&root, &["-r", "/missing", "-o", "out.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("/missing"));
    assert!(stderr.contains("not a valid source file or directory"));

    // The run still completes and leaves an (empty) artifact behind.
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.starts_with("Files saved (0):"));
}

#[test]
fn valid_files_survive_an_invalid_sibling() {
    let (_dir, root) = workspace();
    fs::write(root.join("good.py"), "ok\n").unwrap();

    let (_stdout, stderr, exit_code) =
        run_codepack_in(&root, &["good.py", "missing.py", "-o", "out.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("missing.py"));
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("good.py"));
}
