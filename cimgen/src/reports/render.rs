//! Render command report data structures.

use cimgen_codegen::ClassOutput;

use super::output::{Output, Report};

/// Rendered strings for the emitted classes of one run.
#[derive(Debug)]
pub struct RenderReport {
    pub target: String,
    pub classes: Vec<ClassOutput>,
    /// Join-table declarations, empty when a single class was requested.
    pub join_tables: Vec<String>,
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        for class in &self.classes {
            out.divider(&format!("{} ({})", class.name, class.emit));
            for line in class.imports.iter().chain(&class.header) {
                out.preformatted(line);
            }
            for attribute in &class.attributes {
                out.preformatted(&attribute.declaration);
                if let Some(validator) = &attribute.validator {
                    out.preformatted(validator);
                }
            }
            for literal in &class.literals {
                out.preformatted(literal);
            }
            out.newline();
        }

        if !self.join_tables.is_empty() {
            out.divider(&format!("join tables ({})", self.target));
            for table in &self.join_tables {
                out.preformatted(table);
            }
        }
    }
}
