//! Per-class emission decision table.

use std::fmt;

use cimgen_ir::{ClassDescriptor, Stereotype};
use serde::Serialize;

/// Why a class produces no artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// One of the target's built-in primitive or base names.
    Builtin,
    Primitive,
    /// Measurement/float wrapper, carried as a plain scalar.
    CimDatatype,
    /// Version metadata class.
    VersionMetadata,
    /// Carries a physical `unit` attribute.
    UnitValue,
    Enumeration,
    /// Not declared in any required profile.
    ProfileMismatch,
    /// Declared only in excluded profiles.
    ExcludedProfile,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Builtin => "built-in name",
            SkipReason::Primitive => "primitive",
            SkipReason::CimDatatype => "cim datatype",
            SkipReason::VersionMetadata => "version metadata",
            SkipReason::UnitValue => "unit value",
            SkipReason::Enumeration => "enumeration",
            SkipReason::ProfileMismatch => "no required profile",
            SkipReason::ExcludedProfile => "excluded profile",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The artifact kind produced for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum EmitKind {
    Skip(SkipReason),
    PrimitiveSchema,
    Enum,
    ObjectSchema,
}

impl EmitKind {
    pub fn is_skip(&self) -> bool {
        matches!(self, EmitKind::Skip(_))
    }
}

impl fmt::Display for EmitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitKind::Skip(reason) => write!(f, "skip ({})", reason),
            EmitKind::PrimitiveSchema => write!(f, "primitive"),
            EmitKind::Enum => write!(f, "enum"),
            EmitKind::ObjectSchema => write!(f, "schema"),
        }
    }
}

/// Target-specific skip predicates.
#[derive(Debug, Clone, Default)]
pub struct EmissionRules {
    /// Class names never emitted.
    pub builtin_names: &'static [&'static str],
    pub skip_primitives: bool,
    pub skip_cim_datatypes: bool,
    /// Skip classes whose name contains `Version`.
    pub skip_version_classes: bool,
    /// Skip classes with an attribute labelled `unit`.
    pub skip_unit_classes: bool,
    pub skip_enumerations: bool,
    /// When non-empty, a class must be declared (directly or through an
    /// attribute) in one of these profiles.
    pub required_profiles: Vec<String>,
    /// A class declared only in these profiles is skipped.
    pub excluded_profiles: Vec<String>,
}

impl EmissionRules {
    /// Returns true if the attribute-level profile filter keeps `profiles`.
    pub fn accepts_profiles(&self, profiles: &[String]) -> bool {
        self.required_profiles.is_empty()
            || profiles.iter().any(|p| self.required_profiles.contains(p))
    }
}

/// Decide which artifact a class produces.
///
/// Skip predicates are checked in a fixed order, so a class with a `unit`
/// attribute is skipped before its profiles are looked at.
pub fn decide(class: &ClassDescriptor, rules: &EmissionRules) -> EmitKind {
    if let Some(reason) = skip_reason(class, rules) {
        return EmitKind::Skip(reason);
    }
    if class.is_enumeration() {
        EmitKind::Enum
    } else if class.stereotype == Stereotype::Primitive {
        EmitKind::PrimitiveSchema
    } else {
        EmitKind::ObjectSchema
    }
}

fn skip_reason(class: &ClassDescriptor, rules: &EmissionRules) -> Option<SkipReason> {
    if rules.builtin_names.contains(&class.name.as_str()) {
        return Some(SkipReason::Builtin);
    }
    if rules.skip_primitives && class.stereotype == Stereotype::Primitive {
        return Some(SkipReason::Primitive);
    }
    if rules.skip_cim_datatypes && class.stereotype == Stereotype::CimDatatype {
        return Some(SkipReason::CimDatatype);
    }
    if rules.skip_version_classes && class.name.contains("Version") {
        return Some(SkipReason::VersionMetadata);
    }
    if rules.skip_unit_classes && class.has_attribute("unit") {
        return Some(SkipReason::UnitValue);
    }
    if rules.skip_enumerations && class.is_enumeration() {
        return Some(SkipReason::Enumeration);
    }
    if !rules.required_profiles.is_empty() && !class.in_any_profile(&rules.required_profiles) {
        return Some(SkipReason::ProfileMismatch);
    }
    if !rules.excluded_profiles.is_empty() {
        let mut declared = class
            .origin_profiles
            .iter()
            .chain(class.attributes.iter().flat_map(|a| &a.origin_profiles))
            .peekable();
        if declared.peek().is_some() && declared.all(|p| rules.excluded_profiles.contains(p)) {
            return Some(SkipReason::ExcludedProfile);
        }
    }
    None
}
