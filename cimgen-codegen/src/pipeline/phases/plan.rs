//! Plan phase - runs the mapping engine for the configured target.

use eyre::{Result, eyre};

use crate::{
    pipeline::{CompilationContext, Phase},
    plan::plan_model,
};

/// Phase that plans every lowered class for the context's target.
pub struct PlanPhase;

impl Phase for PlanPhase {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn description(&self) -> &'static str {
        "Classify attributes and resolve relationships for the target"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = ctx
            .model
            .as_ref()
            .ok_or_else(|| eyre!("class map not set - did LowerPhase run?"))?;

        let mut plan = plan_model(model, &ctx.target, &mut ctx.diagnostics);
        plan.failures = std::mem::take(&mut ctx.failures);

        tracing::info!(
            backend = ctx.target.name,
            emitted = plan.emitted().count(),
            skipped = plan.skipped().count(),
            join_tables = plan.join_tables.len(),
            "planned class map"
        );

        ctx.plan = Some(plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cimgen_model::RawModel;

    use super::*;
    use crate::{naming::PYTHON_NAMING, pipeline::phases::LowerPhase, target::TargetConfig};

    #[test]
    fn test_requires_lowered_model() {
        let mut ctx =
            CompilationContext::new(RawModel::default(), TargetConfig::new("test", PYTHON_NAMING));
        assert!(PlanPhase.run(&mut ctx).is_err());
    }

    #[test]
    fn test_moves_failures_into_plan() {
        let raw: RawModel = serde_json::from_str(
            r#"{"classes": [
                {"name": "Bay", "attributes": [{"label": "name"}]},
                {"name": "Substation"}
            ]}"#,
        )
        .expect("Failed to parse test class map");
        let mut ctx = CompilationContext::new(raw, TargetConfig::new("test", PYTHON_NAMING));

        LowerPhase.run(&mut ctx).expect("lower");
        PlanPhase.run(&mut ctx).expect("plan");

        let plan = ctx.take_plan().expect("plan");
        assert_eq!(plan.classes.len(), 1);
        assert_eq!(plan.failures.len(), 1);
        assert_eq!(plan.failures[0].class, "Bay");
        assert!(ctx.failures.is_empty());
    }
}
