//! macOS pbcopy clipboard tool.

use crate::clipboard::tool::{CopyTool, CopyToolError};
use std::io::Write;
use std::process::{Command, Stdio};

/// macOS pasteboard copy tool.
///
/// Uses `pbcopy` to copy text content to the clipboard.
pub struct Pbcopy;

impl Pbcopy {
    /// Create a new Pbcopy tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Pbcopy {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new("pbcopy")
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
            Err(CopyToolError::Failed("pbcopy failed".to_string()))
        }
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
