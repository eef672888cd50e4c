//! Linux xclip clipboard tool.

use crate::clipboard::tool::{CopyTool, CopyToolError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Linux X11 clipboard tool using xclip.
///
/// Uses `xclip -selection clipboard` to copy text content to the clipboard.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }

    /// Check if xclip is installed.
    fn tool_exists() -> bool {
        Command::new("which")
            .arg("xclip")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for Xclip {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new("xclip")
            .args(["-selection", "clipboard"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
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
            Err(CopyToolError::Failed("xclip failed".to_string()))
        }
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
