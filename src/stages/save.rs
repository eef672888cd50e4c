//! Writes the discovered files into the output artifact.
//!
//! The artifact is assembled in memory and written in one pass, so a late
//! failure never leaves a half-written file behind. Individual read errors
//! drop that file from the artifact and the banner; everything else still
//! goes out.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use humansize::{format_size, BINARY};

use crate::clipboard;
use crate::context::Context;
use crate::paths::display_relative;
use crate::pipeline::Stage;

/// Per-file size cap. Anything larger is skipped with a warning so one
/// oversized file cannot dominate the artifact or exhaust memory.
const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Read chunk size.
const CHUNK_SIZE: usize = 8192;

/// Read a file in fixed-size chunks, decoding with lossy replacement so one
/// undecodable byte does not fail the whole file.
fn read_lossy(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Streams each discovered file into the artifact, with a summary banner and
/// footer, then hands the text to the clipboard (best-effort).
pub struct SaveStage;

impl SaveStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SaveStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for SaveStage {
    fn name(&self) -> &'static str {
        "save"
    }

    fn run(&mut self, ctx: &mut Context) -> Result<()> {
        let files: Vec<_> = ctx.discovered.files().to_vec();
        let output = ctx.output.clone();

        let mut body = String::new();
        let mut saved: Vec<String> = Vec::new();

        for file in &files {
            let rel_path = display_relative(file);

            let size = match file.metadata() {
                Ok(meta) => meta.len(),
                Err(_) => {
                    ctx.record_warning(format!("{} does not exist - skipped", file.display()));
                    continue;
                }
            };
            if size > MAX_FILE_SIZE {
                ctx.record_warning(format!(
                    "Skipped {} ({} > {} cap)",
                    file.display(),
                    format_size(size, BINARY),
                    format_size(MAX_FILE_SIZE, BINARY),
                ));
                continue;
            }

            match read_lossy(file) {
                Ok(content) => {
                    body.push_str(&format!("File: {rel_path}\n\n"));
                    body.push_str(&content);
                    body.push_str("\n\n");
                    saved.push(format!("- {rel_path}"));
                }
                Err(e) => {
                    ctx.record_error(format!("Error reading {}: {e}", file.display()));
                }
            }
        }

        let banner = format!("Files saved ({}):\n{}\n\n", saved.len(), saved.join("\n"));
        let footer = format!(
            "\nSaved code from {} files to {}\n",
            saved.len(),
            output.display()
        );
        let artifact = format!("{banner}{body}{footer}");

        if let Err(e) = std::fs::write(&output, &artifact) {
            ctx.record_error(format!(
                "Error writing to output file {}: {e}",
                output.display()
            ));
            return Ok(());
        }
        tracing::info!("wrote {} files to {}", saved.len(), output.display());

        if ctx.clipboard {
            // Best-effort only; a missing clipboard never fails the run.
            clipboard::copy(artifact.trim());
        }
        Ok(())
    }
}
