//! Change-set discovery from `git status --porcelain`.
//!
//! Deleted files are excluded (there is nothing left to read), and the
//! status snapshot is re-checked against the working tree so paths that
//! vanished after the snapshot never reach the output stage. Skip patterns
//! are deliberately not applied here: the change-set is an explicit scope
//! the user asked for, not a blind walk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context as _, Result};

use crate::context::{Context, Discovered};
use crate::filter::matches_extension;
use crate::paths::normalize;
use crate::pipeline::Stage;

/// Return the repository root, or `None` when `start` is not inside a repo.
fn git_root(start: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["-C"])
        .arg(start)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

/// Parse porcelain output into repo-relative paths to include.
///
/// Each line is `XY <path>`: X is the staged column, Y the unstaged one.
/// First match wins:
/// - a `D` in either column excludes the line entirely,
/// - `??` (untracked) is included unless staged-only was requested,
/// - a non-space second column is included when unstaged changes are wanted,
/// - a non-space first column is included when staged changes are wanted.
///
/// Rename lines carry `old -> new`; the post-rename path is the one that
/// exists, so that is what we keep.
fn parse_porcelain(text: &str, staged: bool, unstaged: bool, staged_only: bool) -> Vec<String> {
    let mut included = Vec::new();
    for line in text.lines() {
        if line.len() < 4 {
            continue;
        }
        let status = &line[..2];
        if status.contains('D') {
            continue;
        }
        let path = &line[3..];
        let path = path.rsplit(" -> ").next().unwrap_or(path);

        let mut chars = status.chars();
        let index = chars.next().unwrap_or(' ');
        let worktree = chars.next().unwrap_or(' ');

        let include = if status == "??" {
            !staged_only
        } else if worktree != ' ' && unstaged {
            true
        } else {
            index != ' ' && staged
        };
        if include {
            included.push(path.to_string());
        }
    }
    included
}

/// Populates the discovered list from the git change-set when `--git` is on.
pub struct GitChangesStage;

impl GitChangesStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitChangesStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for GitChangesStage {
    fn name(&self) -> &'static str {
        "git-changes"
    }

    fn run(&mut self, ctx: &mut Context) -> Result<()> {
        if !ctx.git.enabled {
            return Ok(());
        }

        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let Some(root) = git_root(&cwd) else {
            // Ownership stays with the filesystem walk.
            ctx.record_warning("Not inside a Git repository (ignored --git)");
            return Ok(());
        };

        // Neither flag requested means both.
        let (staged, unstaged) = if !ctx.git.staged && !ctx.git.unstaged {
            (true, true)
        } else {
            (ctx.git.staged, ctx.git.unstaged)
        };
        let staged_only = ctx.git.staged && !ctx.git.unstaged;

        let mut cmd = Command::new("git");
        cmd.args(["-C"])
            .arg(&root)
            .args(["status", "--porcelain"]);
        if staged_only {
            cmd.arg("--untracked-files=no");
        }
        let output = cmd.output().context("failed to run git status")?;
        if !output.status.success() {
            anyhow::bail!(
                "git status failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let changed = parse_porcelain(&text, staged, unstaged, staged_only);

        // Resolve against the repo root and drop paths the snapshot no
        // longer matches.
        let existing: Vec<PathBuf> = changed
            .iter()
            .map(|rel| normalize(root.join(rel)))
            .filter(|p| p.exists())
            .collect();

        // With --git the default is to include everything git reports;
        // extension filtering only kicks in when --ext was given explicitly
        // and --all-ext did not override it.
        let include_all = ctx.git.include_all_extensions || !ctx.git.extensions_explicitly_provided;
        let allowed: Vec<PathBuf> = if include_all {
            existing
        } else {
            existing
                .into_iter()
                .filter(|p| matches_extension(p, &ctx.extensions))
                .collect()
        };

        let mut seen = HashSet::new();
        let deduped: Vec<PathBuf> = allowed
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();

        tracing::info!("git change-set contributed {} files", deduped.len());
        ctx.discovered = Discovered::Owned(deduped);
        Ok(())
    }
}
