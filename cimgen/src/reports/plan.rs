//! Plan command report data structures.

use cimgen_codegen::{ModelPlan, PlannedField};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from one planning pass.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub target: String,
    pub plan: ModelPlan,
}

impl PlanReport {
    /// Pretty-printed JSON of the whole report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn describe_field(planned: &PlannedField) -> String {
    let field = &planned.field;
    let mut text = format!(
        "{} -> {}: {} {}",
        planned.attribute.label,
        field.emitted_name,
        field.kind.as_str(),
        field.multiplicity
    );
    if field.kind.is_reference() {
        text.push_str(&format!(", {}", planned.cardinality));
    }
    text
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("Plan for {}", self.target));
        out.newline();

        out.section("Classes");
        for (i, class) in self.plan.classes.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", class.name, class.emit));
            for planned in &class.fields {
                out.sub_item(&describe_field(planned));
            }
        }

        if !self.plan.join_tables.is_empty() {
            out.newline();
            out.section("Join Tables");
            for table in &self.plan.join_tables {
                out.list_item(&format!(
                    "{} ({} <-> {}, declared by {}.{})",
                    table.table_name,
                    table.key.domain,
                    table.key.range,
                    table.declared_by.class,
                    table.declared_by.label
                ));
            }
        }

        if !self.plan.failures.is_empty() {
            out.newline();
            out.section("Dropped Classes");
            for failure in &self.plan.failures {
                out.list_item(&format!("{}: {}", failure.location, failure.message));
            }
        }
    }
}
