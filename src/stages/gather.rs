//! Filesystem discovery: walks roots and explicit files into an ordered,
//! deduplicated list.
//!
//! Skipped directories are pruned, not filtered: the walk never descends
//! into them, which keeps dependency trees like `node_modules` from being
//! enumerated at all.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use crate::context::{Context, Discovered};
use crate::filter::{matches_extension, should_skip};
use crate::paths::normalize;
use crate::pipeline::Stage;

/// Gathers source files from `roots` and `files`. No-op when another stage
/// already owns the discovered list.
pub struct GatherStage;

impl GatherStage {
    pub fn new() -> Self {
        Self
    }

    /// Recursively collect matching files under a normalized directory.
    fn walk_directory(&self, root: &Path, ctx: &mut Context) -> Vec<PathBuf> {
        let skip = ctx.skip.clone();
        let mut found = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| {
                // Prune skipped directories; files are re-checked below so
                // separator-bearing patterns can exclude single files too.
                !(entry.file_type().is_dir() && should_skip(entry.path(), &skip))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    ctx.record_warning(format!("Error walking {}: {err}", root.display()));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if matches_extension(&path, &ctx.extensions) && !should_skip(&path, &skip) {
                found.push(normalize(path));
            }
        }
        found
    }
}

impl Default for GatherStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for GatherStage {
    fn name(&self) -> &'static str {
        "gather"
    }

    fn run(&mut self, ctx: &mut Context) -> Result<()> {
        // Another discovery stage (git) may already own the list.
        if ctx.discovered.is_owned() {
            tracing::debug!("file list already owned, skipping walk");
            return Ok(());
        }

        let entries: Vec<String> = ctx.roots.iter().chain(ctx.files.iter()).cloned().collect();
        let mut gathered: Vec<PathBuf> = Vec::new();

        for entry in entries {
            let normalized = normalize(&entry);
            if should_skip(&normalized, &ctx.skip) {
                // An intentional exclusion, not a failure.
                continue;
            }
            if normalized.is_dir() {
                gathered.extend(self.walk_directory(&normalized, ctx));
            } else if normalized.is_file() && matches_extension(&normalized, &ctx.extensions) {
                gathered.push(normalized);
            } else {
                ctx.record_error(format!("{entry} is not a valid source file or directory."));
            }
        }

        // Dedup preserving first-seen order.
        let mut seen = HashSet::new();
        let deduped: Vec<PathBuf> = gathered
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();

        tracing::info!("gathered {} unique source files", deduped.len());
        ctx.discovered = Discovered::Owned(deduped);
        Ok(())
    }
}
