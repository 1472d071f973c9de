//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from class map validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub target: String,
    /// Phases that ran, as `name - description`.
    pub phases: Vec<String>,
    /// Lints the validate phase ran.
    pub lints: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    pub stats: PlanStats,
}

/// Class counts of one planning pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlanStats {
    pub classes: usize,
    pub emitted: usize,
    pub skipped: usize,
    /// Classes dropped during lowering.
    pub failed: usize,
    pub join_tables: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, phase);
        }
        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(lint);
        }
        out.newline();

        out.section(&format!("Plan ({})", self.target));
        out.key_value_indented("Classes", &self.stats.classes.to_string());
        out.key_value_indented("Emitted", &self.stats.emitted.to_string());
        out.key_value_indented("Skipped", &self.stats.skipped.to_string());
        out.key_value_indented("Failed", &self.stats.failed.to_string());
        out.key_value_indented("Join tables", &self.stats.join_tables.to_string());
        out.newline();

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
    }
}
