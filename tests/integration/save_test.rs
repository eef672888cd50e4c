//! Integration tests for the output artifact and terminal summary.

use std::fs;

use crate::helpers::{run_codepack_in, workspace};

// ============================================================================
// Artifact Byte Contract
// ============================================================================

#[test]
fn artifact_matches_the_documented_shape_exactly() {
    let (_dir, root) = workspace();
    // 10 bytes of content
    fs::write(root.join("a.py"), "abcdefghij").unwrap();
    fs::write(root.join("readme.txt"), "ignored\n").unwrap();

    let (_stdout, stderr, exit_code) = run_codepack_in(&root, &[".", "-o", "out.txt"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    let expected = format!(
        "Files saved (1):\n- a.py\n\nFile: a.py\n\nabcdefghij\n\n\nSaved code from 1 files to {}\n",
        root.join("out.txt").display(),
    );
    assert_eq!(artifact, expected);
}

#[test]
fn artifact_lists_files_in_discovery_order() {
    let (_dir, root) = workspace();
    fs::write(root.join("one.py"), "1\n").unwrap();
    fs::write(root.join("two.py"), "2\n").unwrap();

    let (_stdout, _stderr, exit_code) =
        run_codepack_in(&root, &["-f", "two.py", "one.py", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    let artifact = fs::read_to_string(root.join("out.txt")).unwrap();
    let banner_end = artifact.find("\n\nFile:").unwrap();
    assert_eq!(
        &artifact[..banner_end],
        "Files saved (2):\n- two.py\n- one.py"
    );
}

// ============================================================================
// Terminal Summary
// ============================================================================

#[test]
fn summary_names_the_saved_files() {
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "x\n").unwrap();

    let (stdout, _stderr, exit_code) = run_codepack_in(&root, &[".", "-o", "out.txt"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Saved code from 1 files to"));
    assert!(stdout.contains("Files saved:"));
    assert!(stdout.contains("- a.py"));
    // NO_COLOR is set by the runner, so no escape codes appear.
    assert!(!stdout.contains('\x1b'));
}

// ============================================================================
// Output Failures
// ============================================================================

#[test]
fn unwritable_output_path_fails_the_run_but_not_the_process() {
    let (_dir, root) = workspace();
    fs::write(root.join("a.py"), "x\n").unwrap();

    let (_stdout, stderr, exit_code) =
        run_codepack_in(&root, &[".", "-o", "no-such-dir/out.txt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error writing to output file"));
}
