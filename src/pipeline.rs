//! Stage registry and orchestrator.
//!
//! A run is an ordered sequence of stages sharing one [`Context`]. The
//! registry holds `(order, factory)` pairs; stages are instantiated fresh on
//! every run so none of them can leak state between runs. Fault isolation is
//! the central property here: a stage that fails — by returning an error or
//! by panicking — degrades the result and never stops the stages after it.

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::Result;

use crate::context::Context;

/// One unit of the pipeline: a discovery or output step.
pub trait Stage {
    /// Stable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Execute against the shared context. Expected, per-item problems go
    /// into `ctx.errors` directly; returning `Err` is for failures that
    /// abort this stage (the rest of the pipeline still runs).
    fn run(&mut self, ctx: &mut Context) -> Result<()>;
}

type StageFactory = Box<dyn Fn() -> Box<dyn Stage>>;

/// Ordered collection of stage factories.
///
/// Registration is explicit: the composition root calls [`Registry::register`]
/// once per stage at startup, rather than stages signing themselves up as an
/// import side effect.
#[derive(Default)]
pub struct Registry {
    entries: Vec<(i32, StageFactory)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stage constructor. Lower `order` runs earlier; ties keep
    /// registration order (the sort below is stable).
    pub fn register<S, F>(&mut self, order: i32, factory: F)
    where
        S: Stage + 'static,
        F: Fn() -> S + 'static,
    {
        self.entries
            .push((order, Box::new(move || -> Box<dyn Stage> { Box::new(factory()) })));
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|(order, _)| *order);
        ordered.iter().map(|(_, f)| f().name()).collect()
    }

    /// Instantiate and run every stage in order against `ctx`.
    ///
    /// Errors and panics are caught per stage, logged with the stage name,
    /// and recorded into `ctx.errors`; later stages run against whatever
    /// partial state exists.
    pub fn run(&self, ctx: &mut Context) {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|(order, _)| *order);

        for (_, factory) in ordered {
            let mut stage = factory();
            let name = stage.name();
            tracing::debug!(stage = name, "running stage");

            let outcome = catch_unwind(AssertUnwindSafe(|| stage.run(ctx)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    ctx.record_error(format!("Error running stage {name}: {e:#}"));
                }
                Err(payload) => {
                    let detail = payload
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    ctx.record_error(format!("Stage {name} crashed: {detail}"));
                }
            }
        }
    }
}
