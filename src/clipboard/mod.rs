//! Best-effort clipboard handoff for the finished artifact.
//!
//! Tools are tried in platform priority order; the first one that accepts
//! the text wins. The public [`copy`] entry point never fails the run: a
//! missing clipboard, a broken tool, or the `CODEPACK_NOCOPY=1` opt-out all
//! degrade to "nothing copied".

mod error;
mod tool;
mod tools;

pub use error::ClipboardError;
pub use tool::{CopyTool, CopyToolError};

use tools::platform_tools;

/// Environment variable that disables the clipboard side effect.
pub const NOCOPY_ENV: &str = "CODEPACK_NOCOPY";

/// Copy `text` to the system clipboard, reporting which tool handled it.
pub fn copy_text(text: &str) -> Result<&'static str, ClipboardError> {
    copy_with_tools(text, &platform_tools())
}

/// Try each available tool in order until one succeeds.
fn copy_with_tools(
    text: &str,
    tools: &[Box<dyn CopyTool>],
) -> Result<&'static str, ClipboardError> {
    if tools.is_empty() {
        return Err(ClipboardError::UnsupportedPlatform);
    }
    for tool in tools {
        if !tool.is_available() {
            continue;
        }
        match tool.try_copy_text(text) {
            Ok(()) => return Ok(tool.name()),
            Err(CopyToolError::NotFound) => continue,
            Err(CopyToolError::Failed(message)) => {
                tracing::debug!(tool = tool.name(), %message, "clipboard tool failed");
                continue;
            }
        }
    }
    Err(ClipboardError::NoToolAvailable)
}

/// Best-effort copy honoring the `CODEPACK_NOCOPY=1` opt-out. Failures are
/// logged and swallowed; the caller's run is never affected.
pub fn copy(text: &str) {
    if std::env::var(NOCOPY_ENV).as_deref() == Ok("1") {
        tracing::debug!("clipboard copy disabled via {NOCOPY_ENV}");
        return;
    }
    match copy_text(text) {
        Ok(tool) => tracing::info!(%tool, "copied artifact to clipboard"),
        Err(e) => tracing::debug!("clipboard copy skipped: {e}"),
    }
}
