//! Lint for cyclic super class chains.

use std::collections::{HashMap, HashSet};

use cimgen_core::strip_fragment;
use cimgen_model::RawModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when following super classes leads back to a class.
pub struct InheritanceCycleLint;

impl Lint for InheritanceCycleLint {
    fn name(&self) -> &'static str {
        "inheritance-cycle"
    }

    fn description(&self) -> &'static str {
        "Detect cycles in the super class chain"
    }

    fn check(&self, model: &RawModel, diagnostics: &mut Vec<Diagnostic>) {
        let parents: HashMap<&str, &str> = model
            .classes
            .iter()
            .filter_map(|c| {
                c.super_class
                    .as_deref()
                    .map(|p| (c.name.as_str(), strip_fragment(p)))
            })
            .collect();

        let mut in_cycle: HashSet<&str> = HashSet::new();

        for class in &model.classes {
            let start = class.name.as_str();
            if in_cycle.contains(start) {
                continue;
            }

            let mut path: Vec<&str> = vec![start];
            let mut current = start;
            while let Some(&parent) = parents.get(current) {
                if let Some(pos) = path.iter().position(|&c| c == parent) {
                    let cycle = &path[pos..];
                    // Each cycle is reported once, from the class that closes it first
                    if cycle.iter().all(|c| !in_cycle.contains(c)) {
                        in_cycle.extend(cycle.iter().copied());
                        let mut chain: Vec<&str> = cycle.to_vec();
                        chain.push(parent);
                        diagnostics.push(
                            Diagnostic::error(
                                "validate",
                                format!("inheritance cycle: {}", chain.join(" -> ")),
                            )
                            .at(parent),
                        );
                    }
                    break;
                }
                path.push(parent);
                current = parent;
            }
        }
    }
}
