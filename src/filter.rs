//! Skip-pattern and extension predicates used by the discovery stages.
//!
//! Skip patterns come in two flavors, told apart by whether the pattern as
//! the user wrote it contains a path separator:
//!
//! - `src/vendor` matches any path containing that fragment (substring test
//!   against the normalized path)
//! - `tests` matches any path with a `tests` component, but NOT `latest.py`
//!   (exact component test)
//!
//! There are no globs. The asymmetry lets a bare name exclude a whole
//! subtree without accidentally catching longer names that merely contain
//! the same letters.

use std::path::{Path, MAIN_SEPARATOR};

use crate::paths::normalize;

/// True when `path` should be excluded from discovery.
///
/// Short-circuits on the first matching pattern; an empty pattern list skips
/// nothing.
pub fn should_skip<P: AsRef<Path>>(path: P, patterns: &[String]) -> bool {
    let norm_path = normalize(path);
    let path_str = norm_path.to_string_lossy();

    for pattern in patterns {
        // The separator check runs on the pattern as written; normalizing
        // first would turn every bare name into an absolute path.
        if pattern.contains(MAIN_SEPARATOR) || pattern.contains('/') {
            let norm_pattern = normalize(pattern);
            if path_str.contains(&*norm_pattern.to_string_lossy()) {
                return true;
            }
        } else {
            let wanted = normalize(pattern);
            let wanted = wanted
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| pattern.clone());
            if norm_path
                .components()
                .any(|c| c.as_os_str().to_string_lossy() == wanted)
            {
                return true;
            }
        }
    }
    false
}

/// True when the file's suffix (after the last `.` of the final component,
/// lowercased, no dot) is in `allowed`. Suffixless paths never match.
pub fn matches_extension<P: AsRef<Path>>(path: P, allowed: &[String]) -> bool {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| *a == ext)
        }
        None => false,
    }
}
