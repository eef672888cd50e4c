//! Passthrough-argument stage.

use anyhow::Result;

use crate::context::Context;
use crate::pipeline::Stage;

/// Logs any arguments passed after `--`. They are reserved for future
/// switches; today the stage only makes them visible.
pub struct ExtraArgsStage;

impl ExtraArgsStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExtraArgsStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ExtraArgsStage {
    fn name(&self) -> &'static str {
        "extra-args"
    }

    fn run(&mut self, ctx: &mut Context) -> Result<()> {
        if !ctx.extra_args.is_empty() {
            tracing::info!(args = ?ctx.extra_args, "extra arguments provided");
        }
        Ok(())
    }
}
