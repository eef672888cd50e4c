//! User configuration file.
//!
//! Lives at `~/.config/codepack/config.toml` (platform equivalent via
//! `dirs`). Every field is optional; missing fields fall back to built-in
//! defaults, and command-line flags override the file. A missing file is
//! not an error - most users never create one.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

/// Skip patterns applied when the user provides none: common build output
/// and VCS bookkeeping directories.
pub const DEFAULT_SKIP: &[&str] = &["node_modules", "dist", "build", "target", ".git"];

/// Extension list applied when the user provides none.
pub const DEFAULT_EXTENSIONS: &[&str] = &["py"];

/// Default output artifact path.
pub const DEFAULT_OUTPUT: &str = "./temp.txt";

/// Persistent defaults, overridable per-invocation from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Skip patterns used when `--skip` is absent.
    pub skip: Vec<String>,
    /// Extensions used when `--ext` is absent.
    pub extensions: Vec<String>,
    /// Output path used when `--output` is absent.
    pub output: String,
    /// Whether to copy the finished artifact to the clipboard.
    pub clipboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            output: DEFAULT_OUTPUT.to_string(),
            clipboard: true,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("no config directory on this platform")?;
        Ok(base.join("codepack").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist. A file that exists but does not parse is an error - silently
    /// ignoring a typo would be worse than failing loudly.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse a TOML config document.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
