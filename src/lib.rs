//! codepack - collect source files into a single reviewable text snapshot.
//!
//! The core is a small stage pipeline sharing one mutable [`Context`]:
//! discovery stages build the file list (filesystem walk or git change-set,
//! whichever runs first owns it), and the save stage streams the list into
//! the output artifact. Stages are fault-isolated: one failing stage
//! degrades the result, it never aborts the run.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod context;
pub mod filter;
pub mod paths;
pub mod pipeline;
pub mod stages;
pub mod ui;

pub use cli::Cli;
pub use config::Config;
pub use context::{Context, Discovered, GitOptions};
pub use pipeline::{Registry, Stage};
