//! Attribute classification into field shapes.

use cimgen_ir::{AttributeDescriptor, AttributeKind, ClassMap, Stereotype};
use serde::Serialize;

use super::{
    MappedPrimitive, Multiplicity, MultiplicityError, ScalarSource, effective_multiplicity,
    map_primitive,
};
use crate::{pipeline::Diagnostic, target::TargetConfig};

/// The shape of an emitted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Primitive,
    Enum,
    /// Single-valued class reference.
    Reference,
    /// Multi-valued class reference.
    Collection,
}

impl FieldKind {
    /// Returns true for fields that point at another class.
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldKind::Reference | FieldKind::Collection)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Primitive => "primitive",
            FieldKind::Enum => "enum",
            FieldKind::Reference => "reference",
            FieldKind::Collection => "collection",
        }
    }
}

/// The element type of a field, before target wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalarType {
    /// The `mRID` identity.
    Identifier,
    Primitive(MappedPrimitive),
    Enum { name: String },
    Class { name: String },
    /// Reference declared without a datatype or range.
    Untyped,
}

impl ScalarType {
    /// The referenced class or enumeration name.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            ScalarType::Enum { name } | ScalarType::Class { name } => Some(name),
            _ => None,
        }
    }
}

/// How one attribute is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    pub kind: FieldKind,
    pub emitted_name: String,
    pub scalar: ScalarType,
    pub multiplicity: Multiplicity,
}

impl FieldPlan {
    pub fn is_optional(&self) -> bool {
        self.multiplicity.is_optional()
    }

    pub fn is_collection(&self) -> bool {
        self.kind == FieldKind::Collection
    }
}

/// Append `s` unless the name already ends in `s`.
///
/// Irregular plurals are not handled.
pub fn pluralize(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{}s", name)
    }
}

/// Classify an attribute into a field plan.
///
/// A missing or empty multiplicity reads as (1,1). A malformed one also
/// reads as (1,1) and records a warning.
pub fn classify(
    attr: &AttributeDescriptor,
    model: &ClassMap,
    target: &TargetConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> FieldPlan {
    let multiplicity = field_multiplicity(attr, target, diagnostics);

    let (kind, scalar) = if attr.is_identity() {
        (FieldKind::Primitive, ScalarType::Identifier)
    } else {
        match &attr.kind {
            AttributeKind::Datatype { name }
                if model.stereotype(name) == Some(Stereotype::Compound) =>
            {
                (
                    reference_kind(multiplicity),
                    ScalarType::Class { name: name.clone() },
                )
            }
            AttributeKind::Datatype { name } => (
                FieldKind::Primitive,
                ScalarType::Primitive(datatype_scalar(attr, name, model, diagnostics)),
            ),
            AttributeKind::Reference { range } if model.is_enumeration(range) => (
                FieldKind::Enum,
                ScalarType::Enum {
                    name: range.clone(),
                },
            ),
            AttributeKind::Reference { range } => (
                reference_kind(multiplicity),
                ScalarType::Class {
                    name: range.clone(),
                },
            ),
            AttributeKind::UntypedReference => (reference_kind(multiplicity), ScalarType::Untyped),
        }
    };

    FieldPlan {
        kind,
        emitted_name: field_name(&attr.label, kind, target),
        scalar,
        multiplicity,
    }
}

fn reference_kind(multiplicity: Multiplicity) -> FieldKind {
    if multiplicity.is_many() {
        FieldKind::Collection
    } else {
        FieldKind::Reference
    }
}

fn field_multiplicity(
    attr: &AttributeDescriptor,
    target: &TargetConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Multiplicity {
    match effective_multiplicity(
        &attr.label,
        attr.multiplicity.as_deref(),
        target.plural_role_heuristic,
    ) {
        Ok(multiplicity) => multiplicity,
        Err(MultiplicityError::Empty) => Multiplicity::ONE,
        Err(err) => {
            diagnostics.push(
                Diagnostic::warning("plan", format!("{}, treated as 1..1", err)).at(attr.about()),
            );
            Multiplicity::ONE
        }
    }
}

fn datatype_scalar(
    attr: &AttributeDescriptor,
    name: &str,
    model: &ClassMap,
    diagnostics: &mut Vec<Diagnostic>,
) -> MappedPrimitive {
    let mapped = map_primitive(name);
    if mapped.source != ScalarSource::Fallback {
        return mapped;
    }
    if model.is_cim_datatype(name) {
        tracing::debug!(
            attribute = %attr.about(),
            datatype = name,
            "cim datatype carried as Float"
        );
        return MappedPrimitive {
            source: ScalarSource::CimDatatype,
            ..mapped
        };
    }
    diagnostics.push(
        Diagnostic::warning(
            "plan",
            format!("unrecognized datatype '{}' mapped to Float", name),
        )
        .at(attr.about()),
    );
    mapped
}

fn field_name(label: &str, kind: FieldKind, target: &TargetConfig) -> String {
    match kind {
        FieldKind::Reference => target
            .naming
            .field_name(label, target.reference_suffix.unwrap_or_default()),
        FieldKind::Collection => match target.collection_suffix {
            Some(suffix) => target.naming.field_name(label, suffix),
            None if target.pluralize_collections => {
                let name = (target.naming.field_to_name)(label);
                target.naming.safe_name(&pluralize(&name))
            }
            None => target.naming.field_name(label, ""),
        },
        FieldKind::Primitive | FieldKind::Enum => target.naming.field_name(label, ""),
    }
}
