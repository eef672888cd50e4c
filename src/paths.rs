//! Path normalization and display helpers.
//!
//! Every component that compares paths goes through [`normalize`] first, so
//! two spellings of the same file (`./src/a.rs`, `src/../src/a.rs`) collapse
//! to one canonical absolute form. Normalization is purely lexical: it never
//! touches the filesystem and never follows symlinks, so it works for paths
//! that do not exist yet.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to an absolute, lexically resolved form.
///
/// Relative paths are anchored at the current working directory, then `.`
/// and `..` segments are folded out. Idempotent: normalizing an already
/// normalized path returns it unchanged.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Render a path relative to the current working directory for banners and
/// the terminal summary. Paths outside the working directory are shown
/// absolute rather than as a `../..` chain.
pub fn display_relative<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match std::env::current_dir() {
        Ok(cwd) => match path.strip_prefix(&cwd) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
            _ => path.display().to_string(),
        },
        Err(_) => path.display().to_string(),
    }
}
