//! Plan operation - run the mapping engine for one target.

use cimgen_codegen::pipeline::{Pipeline, TracingPlugin};
use cimgen_model::RawModel;
use eyre::{Context, Result};

use crate::{reports::PlanReport, target::TargetSupport};

/// Execute the plan operation.
///
/// Diagnostics are logged through `tracing` as the phases run.
pub fn plan(raw: RawModel, support: &TargetSupport) -> Result<PlanReport> {
    let mut ctx = Pipeline::new()
        .plugin(TracingPlugin::new())
        .run(raw, support.config())
        .wrap_err("Planning failed")?;

    Ok(PlanReport {
        target: support.target.to_string(),
        plan: ctx.take_plan()?,
    })
}
