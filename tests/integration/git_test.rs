//! Integration tests for git change-set discovery.
//!
//! Tests run against real repositories built in temp directories and
//! return early on machines without a git binary.

use std::fs;

use crate::helpers::{git, git_available, init_repo, run_codepack_in, workspace};

#[test]
fn git_mode_collects_the_change_set_with_all_extensions() {
    if !git_available() {
        return;
    }
    let (_dir, root) = workspace();
    init_repo(&root);

    fs::write(root.join("tracked.py"), "print('v2')\n").unwrap(); // unstaged edit
    fs::write(root.join("new.js"), "let x;\n").unwrap(); // untracked
    fs::write(root.join("staged.py"), "pass\n").unwrap();
    git(&root, &["add", "staged.py"]);

    let (_stdout, stderr, exit_code) = run_codepack_in(&root, &["--git", "-o", "out.txt"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("tracked.py"));
    assert!(artifact.contains("staged.py"));
    // No --ext given, so git mode includes every extension.
    assert!(artifact.contains("new.js"));
}

#[test]
fn deleted_files_never_reach_the_artifact() {
    if !git_available() {
        return;
    }
    let (_dir, root) = workspace();
    init_repo(&root);

    fs::write(root.join("doomed.py"), "x\n").unwrap();
    git(&root, &["add", "doomed.py"]);
    git(&root, &["commit", "-q", "-m", "add doomed"]);
    fs::remove_file(root.join("doomed.py")).unwrap();
    fs::write(root.join("alive.py"), "y\n").unwrap();

    let (_stdout, _stderr, exit_code) = run_codepack_in(&root, &["--git", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(!artifact.contains("doomed.py"));
    assert!(artifact.contains("alive.py"));
}

#[test]
fn explicit_ext_filters_the_change_set() {
    if !git_available() {
        return;
    }
    let (_dir, root) = workspace();
    init_repo(&root);

    fs::write(root.join("a.py"), "x\n").unwrap();
    fs::write(root.join("b.js"), "y\n").unwrap();

    let (_stdout, _stderr, exit_code) =
        run_codepack_in(&root, &["--git", "--ext", "py", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("a.py"));
    assert!(!artifact.contains("b.js"));
}

#[test]
fn all_ext_overrides_an_explicit_list() {
    if !git_available() {
        return;
    }
    let (_dir, root) = workspace();
    init_repo(&root);

    fs::write(root.join("b.js"), "y\n").unwrap();

    let (_stdout, _stderr, exit_code) = run_codepack_in(
        &root,
        &["--git", "--ext", "py", "--all-ext", "-o", "out.txt"],
    );

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("b.js"));
}

#[test]
fn staged_only_excludes_untracked_and_unstaged() {
    if !git_available() {
        return;
    }
    let (_dir, root) = workspace();
    init_repo(&root);

    fs::write(root.join("tracked.py"), "print('v2')\n").unwrap(); // unstaged edit
    fs::write(root.join("untracked.py"), "x\n").unwrap();
    fs::write(root.join("staged.py"), "y\n").unwrap();
    git(&root, &["add", "staged.py"]);

    let (_stdout, _stderr, exit_code) =
        run_codepack_in(&root, &["--git", "--staged", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("staged.py"));
    assert!(!artifact.contains("untracked.py"));
    assert!(!artifact.contains("tracked.py"));
}

#[test]
fn outside_a_repository_git_mode_degrades_to_the_walk() {
    if !git_available() {
        return;
    }
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "x\n").unwrap();

    let (_stdout, stderr, exit_code) = run_codepack_in(&root, &["--git", ".", "-o", "out.txt"]);

    // The warning lands in the error list, so the exit code is nonzero,
    // but the walk still produced the artifact.
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Not inside a Git repository"));
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    assert!(artifact.contains("a.py"));
}
