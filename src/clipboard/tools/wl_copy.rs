//! Linux Wayland wl-copy clipboard tool.

use crate::clipboard::tool::{CopyTool, CopyToolError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Linux Wayland clipboard tool using wl-copy.
///
/// Uses `wl-copy` to copy text content to the clipboard.
pub struct WlCopy;

impl WlCopy {
    /// Create a new WlCopy tool.
    pub fn new() -> Self {
        Self
    }

    /// Check if wl-copy is installed.
    fn tool_exists() -> bool {
        Command::new("which")
            .arg("wl-copy")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for WlCopy {
    fn name(&self) -> &'static str {
        "wl-copy"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed("wl-copy failed".to_string()))
        }
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
