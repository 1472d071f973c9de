//! Lint for references to classes missing from the class map.

use std::collections::HashSet;

use cimgen_core::strip_fragment;
use cimgen_model::RawModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns on super classes and ranges not present in the map.
///
/// Missing super classes are treated as absent when planning, so these
/// are warnings only.
pub struct DanglingReferenceLint;

impl Lint for DanglingReferenceLint {
    fn name(&self) -> &'static str {
        "dangling-reference"
    }

    fn description(&self) -> &'static str {
        "Warn on super classes and ranges missing from the class map"
    }

    fn check(&self, model: &RawModel, diagnostics: &mut Vec<Diagnostic>) {
        let names: HashSet<&str> = model.classes.iter().map(|c| c.name.as_str()).collect();

        for class in &model.classes {
            if let Some(parent) = class.super_class.as_deref().map(strip_fragment)
                && !names.contains(parent)
            {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "super class '{}' of '{}' is not in the class map",
                            parent, class.name
                        ),
                    )
                    .at(&class.name),
                );
            }

            for attr in &class.attributes {
                let Some(range) = attr.range.as_deref().map(strip_fragment) else {
                    continue;
                };
                if !names.contains(range) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("range class '{}' is not in the class map", range),
                        )
                        .at(format!("{}.{}", class.name, attr.label)),
                    );
                }
            }
        }
    }
}
