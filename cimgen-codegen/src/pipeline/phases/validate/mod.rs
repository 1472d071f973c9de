//! Validate phase - runs lints on the raw class map.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DanglingReferenceLint, DuplicateClassLint, InheritanceCycleLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the raw class map using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateClassLint),
                Box::new(DanglingReferenceLint),
                Box::new(InheritanceCycleLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check class map integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.raw, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            let details: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
            bail!(
                "Validation failed with {} error(s):\n{}",
                ctx.error_count(),
                details.join("\n")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cimgen_model::RawModel;

    use super::*;
    use crate::{naming::PYTHON_NAMING, pipeline::Diagnostic, target::TargetConfig};

    fn make_context(json: &str) -> CompilationContext {
        let raw: RawModel = serde_json::from_str(json).expect("Failed to parse test class map");
        CompilationContext::new(raw, TargetConfig::new("test", PYTHON_NAMING))
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _model: &RawModel, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = make_context(r#"{"classes": []}"#);
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let err = phase.run(&mut ctx).unwrap_err();

        assert!(ctx.has_errors());
        insta::assert_snapshot!(err.to_string(), @r"
        Validation failed with 1 error(s):
          error: forced error
        ");
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = make_context(
            r#"{"classes": [{"name": "Bay", "superClass": "EquipmentContainer"}]}"#,
        );

        let phase = ValidatePhase::empty().with_lint(DanglingReferenceLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec!["duplicate-class", "dangling-reference", "inheritance-cycle"]
        );
    }
}
