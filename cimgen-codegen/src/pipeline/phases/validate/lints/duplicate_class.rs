//! Lint for duplicate class declarations.

use std::collections::HashSet;

use cimgen_model::RawModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a class name is declared twice.
pub struct DuplicateClassLint;

impl Lint for DuplicateClassLint {
    fn name(&self) -> &'static str {
        "duplicate-class"
    }

    fn description(&self) -> &'static str {
        "Detect classes declared more than once"
    }

    fn check(&self, model: &RawModel, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut reported: HashSet<&str> = HashSet::new();

        for class in &model.classes {
            let name = class.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                diagnostics.push(
                    Diagnostic::error("validate", format!("duplicate class '{}'", name))
                        .at(name),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_model(json: &str) -> RawModel {
        serde_json::from_str(json).expect("Failed to parse test class map")
    }

    #[test]
    fn test_no_duplicates() {
        let model = parse_model(r#"{"classes": [{"name": "Bay"}, {"name": "Substation"}]}"#);

        let mut diagnostics = Vec::new();
        DuplicateClassLint.check(&model, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reported_once() {
        let model = parse_model(
            r#"{"classes": [{"name": "Bay"}, {"name": "Bay"}, {"name": "Bay"}]}"#,
        );

        let mut diagnostics = Vec::new();
        DuplicateClassLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("Bay"));
    }
}
