//! Check operation - class map validation.

use std::path::Path;

use cimgen_codegen::pipeline::{Pipeline, Severity, phases::ValidatePhase};
use cimgen_model::RawModel;
use eyre::{Context, Result};

use crate::{
    reports::{CheckReport, PlanStats},
    target::TargetSupport,
};

/// Execute the check operation.
///
/// Runs the pipeline for the configured target and returns diagnostics
/// and class counts.
pub fn check(raw: RawModel, support: &TargetSupport, config_path: &Path) -> Result<CheckReport> {
    let pipeline = Pipeline::new();
    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| format!("{} - {}", p.name, p.description))
        .collect();
    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| format!("{}: {}", l.name, l.description))
        .collect();

    let class_count = raw.classes.len();
    let mut ctx = pipeline
        .run(raw, support.config())
        .wrap_err("Validation failed")?;
    let plan = ctx.take_plan()?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        target: support.target.to_string(),
        phases,
        lints,
        errors,
        warnings,
        infos,
        stats: PlanStats {
            classes: class_count,
            emitted: plan.emitted().count(),
            skipped: plan.skipped().count(),
            failed: plan.failures.len(),
            join_tables: plan.join_tables.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_check_counts_and_errors() {
        let report = check(
            fixtures::raw(),
            &fixtures::support("sqlalchemy"),
            Path::new("cimgen.toml"),
        )
        .expect("check");

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].ends_with("--> SwitchState.instances"));
        assert_eq!(
            report.stats,
            PlanStats {
                classes: 5,
                emitted: 3,
                skipped: 1,
                failed: 1,
                join_tables: 1,
            }
        );
        assert_eq!(report.phases.len(), 3);
        assert_eq!(report.lints.len(), 3);
    }

    #[test]
    fn test_duplicate_class_fails() {
        let raw: RawModel =
            serde_json::from_str(r#"{"classes": [{"name": "Bay"}, {"name": "Bay"}]}"#)
                .expect("parse");

        let err = check(raw, &fixtures::support("go"), Path::new("cimgen.toml")).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed");
    }
}
