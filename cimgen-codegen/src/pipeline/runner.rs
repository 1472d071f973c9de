//! Pipeline orchestrator.

use cimgen_model::RawModel;
use eyre::Result;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{LowerPhase, PlanPhase, ValidatePhase},
};
use crate::target::TargetConfig;

/// The planning pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower, plan) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(TracingPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(raw, target)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names and descriptions of every phase, in run order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        [ValidatePhase::new().info(), LowerPhase.info(), PlanPhase.info()]
            .into_iter()
            .chain(self.phases.iter().map(|phase| phase.info()))
            .collect()
    }

    /// Run the pipeline on a raw class map for one target.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the raw class map
    /// 2. LowerPhase - builds the typed class map
    /// 3. PlanPhase - plans every class for the target
    /// 4. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, raw: RawModel, target: TargetConfig) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(raw, target);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(PlanPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
