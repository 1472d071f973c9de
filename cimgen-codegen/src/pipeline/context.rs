//! Compilation context passed through pipeline phases.

use cimgen_ir::ClassMap;
use cimgen_model::RawModel;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    plan::{ClassFailure, ModelPlan},
    target::TargetConfig,
};

/// Context passed through all pipeline phases.
///
/// Carries the raw class map and the target configuration, and
/// accumulates the typed model, the plan and diagnostics.
#[derive(Debug)]
pub struct CompilationContext {
    /// The raw class map being planned.
    pub raw: RawModel,
    pub target: TargetConfig,
    /// Typed class map (populated by LowerPhase).
    pub model: Option<ClassMap>,
    /// Classes dropped while lowering.
    pub failures: Vec<ClassFailure>,
    /// The plan (populated by PlanPhase).
    pub plan: Option<ModelPlan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(raw: RawModel, target: TargetConfig) -> Self {
        Self {
            raw,
            target,
            model: None,
            failures: Vec::new(),
            plan: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the typed class map out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if LowerPhase hasn't run.
    pub fn take_model(&mut self) -> Result<ClassMap> {
        self.model
            .take()
            .ok_or_else(|| eyre!("class map not set - did LowerPhase run?"))
    }

    /// Take the plan out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if PlanPhase hasn't run.
    pub fn take_plan(&mut self) -> Result<ModelPlan> {
        self.plan
            .take()
            .ok_or_else(|| eyre!("plan not set - did PlanPhase run?"))
    }
}
