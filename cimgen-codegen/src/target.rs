//! Target configuration the engine is parameterized by.

use crate::{mapping::EmissionRules, naming::NamingConvention};

/// Everything the engine needs to know about one output target.
///
/// Backends build this once with the builder methods below; the CLI then
/// narrows the profile filters from `cimgen.toml`.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub name: &'static str,
    pub naming: NamingConvention,
    /// Appended to single-valued reference fields (e.g., `Id`).
    pub reference_suffix: Option<&'static str>,
    /// Appended to multi-valued reference fields (e.g., `Ids`).
    pub collection_suffix: Option<&'static str>,
    /// Pluralize collection names when no suffix is configured.
    ///
    /// No built-in target turns this on; the Go backend's `Ids` suffix
    /// plays the same role there.
    pub pluralize_collections: bool,
    /// Read an `M:1` end labelled with a trailing `s` as many-valued. When
    /// resolving relationships this only applies against a single-valued
    /// opposite end.
    pub plural_role_heuristic: bool,
    pub rules: EmissionRules,
}

impl TargetConfig {
    pub fn new(name: &'static str, naming: NamingConvention) -> Self {
        Self {
            name,
            naming,
            reference_suffix: None,
            collection_suffix: None,
            pluralize_collections: false,
            plural_role_heuristic: false,
            rules: EmissionRules::default(),
        }
    }

    pub fn with_suffixes(mut self, reference: &'static str, collection: &'static str) -> Self {
        self.reference_suffix = Some(reference);
        self.collection_suffix = Some(collection);
        self
    }

    pub fn with_pluralized_collections(mut self) -> Self {
        self.pluralize_collections = true;
        self
    }

    pub fn with_plural_role_heuristic(mut self) -> Self {
        self.plural_role_heuristic = true;
        self
    }

    pub fn with_rules(mut self, rules: EmissionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the profile filters. `None` keeps the target's default.
    pub fn with_profiles(
        mut self,
        required: Option<Vec<String>>,
        excluded: Option<Vec<String>>,
    ) -> Self {
        if let Some(required) = required {
            self.rules.required_profiles = required;
        }
        if let Some(excluded) = excluded {
            self.rules.excluded_profiles = excluded;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::GO_NAMING;

    #[test]
    fn test_with_profiles_keeps_defaults() {
        let target = TargetConfig::new("go", GO_NAMING).with_rules(EmissionRules {
            required_profiles: vec!["EQ".into()],
            ..EmissionRules::default()
        });

        let unchanged = target.clone().with_profiles(None, Some(vec!["DL".into()]));
        assert_eq!(unchanged.rules.required_profiles, vec!["EQ".to_string()]);
        assert_eq!(unchanged.rules.excluded_profiles, vec!["DL".to_string()]);

        let cleared = target.with_profiles(Some(Vec::new()), None);
        assert!(cleared.rules.required_profiles.is_empty());
    }
}
