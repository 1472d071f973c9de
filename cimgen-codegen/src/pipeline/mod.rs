//! Planning pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that takes a raw class
//! map through validation, lowering and planning:
//!
//! - Explicit phase boundaries (validate → lower → plan)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use cimgen_codegen::pipeline::{Pipeline, TracingPlugin};
//!
//! let pipeline = Pipeline::new().plugin(TracingPlugin::new());
//! let mut ctx = pipeline.run(raw, backend.config())?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let plan = ctx.take_plan()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod trace;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use trace::TracingPlugin;
