//! Command-line surface and its resolution into a run [`Context`].
//!
//! Positional sources are reclassified by probing the filesystem: whatever
//! resolves to a directory joins `roots`, everything else joins `files`
//! (and the discovery stage reports the invalid ones). The same probing is
//! applied to `--roots`/`--files`, so users can hand either flag either
//! kind of path.

use clap::Parser;
use clap_complete::Shell;

use crate::config::Config;
use crate::context::{Context, GitOptions};
use crate::paths::normalize;

/// Version string: package version plus git SHA and build date on dev
/// builds, package version plus build date on `--features release` builds.
pub fn build_version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("CODEPACK_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            let short = &sha[..sha.len().min(7)];
            format!("{base} ({short} {date})")
        }
        _ => format!("{base} ({date})"),
    }
}

/// Save source files from directories, explicit paths, or the git
/// change-set into a single reviewable text snapshot.
#[derive(Parser, Debug)]
#[command(name = "codepack", version = build_version())]
pub struct Cli {
    /// Directories or file paths to search for source files
    #[arg(short, long, num_args = 0.., value_name = "PATH")]
    pub roots: Vec<String>,

    /// Directories or file paths to include
    #[arg(short, long, num_args = 0.., value_name = "PATH")]
    pub files: Vec<String>,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Subdirectory names or path fragments to skip (e.g. 'vendor' or 'foo/bar.py')
    #[arg(long, num_args = 0.., value_name = "PATTERN")]
    pub skip: Option<Vec<String>>,

    /// File extensions (without dots) to collect, e.g. --ext py toml js
    #[arg(long, visible_alias = "extensions", num_args = 0.., value_name = "EXT")]
    pub ext: Option<Vec<String>>,

    /// Collect files listed by `git status --porcelain` instead of walking
    #[arg(long)]
    pub git: bool,

    /// With --git: only include staged changes
    #[arg(long)]
    pub staged: bool,

    /// With --git: only include unstaged changes
    #[arg(long)]
    pub unstaged: bool,

    /// With --git: include every file git reports, ignoring --ext
    #[arg(long = "all-ext")]
    pub all_ext: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Directories or file paths to collect from
    #[arg(value_name = "SOURCE")]
    pub source: Vec<String>,

    /// Reserved for future switches
    #[arg(last = true, hide = true)]
    pub extra: Vec<String>,
}

/// Split paths into (directories, everything else) by probing the
/// filesystem. Nonexistent paths land in the second bucket so the discovery
/// stage can report them.
fn reclassify(paths: &[String]) -> (Vec<String>, Vec<String>) {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for p in paths {
        if normalize(p).is_dir() {
            dirs.push(p.clone());
        } else {
            files.push(p.clone());
        }
    }
    (dirs, files)
}

/// Lowercase and strip leading dots so `.PY` and `py` mean the same thing.
fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect()
}

impl Cli {
    /// Merge CLI flags over config-file defaults into the run context.
    pub fn resolve(self, config: Config) -> Context {
        let ext_provided = self.ext.is_some();

        let mut candidate_roots = self.roots;
        let mut candidate_files = self.files;
        // Positional sources join whichever bucket matches what they are.
        for src in self.source {
            if normalize(&src).is_dir() {
                candidate_roots.push(src);
            } else {
                candidate_files.push(src);
            }
        }

        let (roots_dirs, roots_files) = reclassify(&candidate_roots);
        let (files_dirs, files_files) = reclassify(&candidate_files);

        Context {
            roots: [roots_dirs, files_dirs].concat(),
            files: [roots_files, files_files].concat(),
            skip: self.skip.unwrap_or(config.skip),
            extensions: normalize_extensions(self.ext.unwrap_or(config.extensions)),
            output: normalize(self.output.unwrap_or(config.output)),
            git: GitOptions {
                enabled: self.git,
                staged: self.staged,
                unstaged: self.unstaged,
                include_all_extensions: self.all_ext,
                extensions_explicitly_provided: ext_provided,
            },
            clipboard: config.clipboard,
            extra_args: self.extra,
            ..Context::default()
        }
    }
}
