//! The shared mutable record threaded through one pipeline run.

use std::path::PathBuf;

/// Git-mode options carried on the [`Context`].
#[derive(Debug, Clone, Default)]
pub struct GitOptions {
    /// Collect the change-set from `git status` instead of walking.
    pub enabled: bool,
    /// Only staged changes were requested.
    pub staged: bool,
    /// Only unstaged changes were requested.
    pub unstaged: bool,
    /// Include every file git reports, ignoring the extension list.
    pub include_all_extensions: bool,
    /// The user passed `--ext` themselves (as opposed to the built-in
    /// default); git discovery filters by extension only in that case.
    pub extensions_explicitly_provided: bool,
}

/// Ownership state of the discovered file list.
///
/// Discovery stages hand the list off through this: git discovery (when it
/// runs and succeeds) sets `Owned`, and the filesystem walk only runs while
/// the state is still `NotRun`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Discovered {
    /// No discovery stage has produced a list yet.
    #[default]
    NotRun,
    /// A discovery stage owns the list; later discovery stages are no-ops.
    Owned(Vec<PathBuf>),
}

impl Discovered {
    /// The discovered files, empty when no stage has run.
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Discovered::NotRun => &[],
            Discovered::Owned(files) => files,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Discovered::Owned(_))
    }
}

/// Everything one run reads and mutates.
///
/// Built once from CLI + config, passed to each stage in sequence. `errors`
/// is append-only; `discovered` is write-once-then-read. Stages run strictly
/// one after another, so no locking is involved anywhere.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directories to walk (entries are reclassified by probing, so a file
    /// path landing here is handled too).
    pub roots: Vec<String>,
    /// Explicit file paths to include.
    pub files: Vec<String>,
    /// Skip patterns, in the user's order.
    pub skip: Vec<String>,
    /// Allowed extensions, lowercase, without dots.
    pub extensions: Vec<String>,
    /// Absolute output artifact path.
    pub output: PathBuf,
    /// Git-mode options.
    pub git: GitOptions,
    /// Whether to hand the artifact to the clipboard after writing.
    pub clipboard: bool,
    /// Passthrough arguments after `--`, logged for forward compatibility.
    pub extra_args: Vec<String>,
    /// The discovered file list, once a discovery stage has run.
    pub discovered: Discovered,
    /// Aggregated error messages; non-empty means a nonzero exit code.
    pub errors: Vec<String>,
}

impl Context {
    /// Record a non-fatal error: logged at error level and kept for the
    /// end-of-run summary and exit code.
    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.errors.push(message);
    }

    /// Record a warning that still counts toward the failure exit code, but
    /// is logged at warning level (e.g. a vanished file).
    pub fn record_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.errors.push(message);
    }
}
