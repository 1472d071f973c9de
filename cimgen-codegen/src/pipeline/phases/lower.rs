//! Lower phase - builds the typed class map from the raw loader output.
//!
//! URI fragments are stripped from every class reference, absent keys get
//! their defaults and enumeration literals are decoded. A class with an
//! attribute or literal that cannot be lowered is dropped from the map and
//! recorded as a [`ClassFailure`]; the other classes are unaffected.

use cimgen_core::strip_fragment;
use cimgen_ir::{
    AttributeDescriptor, AttributeKind, ClassDescriptor, ClassMap, EnumInstance, InverseEnd,
    Stereotype,
};
use cimgen_model::{RawAttribute, RawClass, RawInstance};
use eyre::Result;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    plan::ClassFailure,
};

/// Why a class could not be lowered.
#[derive(Debug, Error)]
pub enum LowerError {
    #[error("attribute '{attribute}' declares both dataType '{data_type}' and range '{range}'")]
    ConflictingKind {
        class: String,
        attribute: String,
        data_type: String,
        range: String,
    },

    #[error("attribute '{attribute}' has no dataType, range or multiplicity")]
    MissingKind { class: String, attribute: String },

    #[error("unparseable enumeration instance '{text}'")]
    InvalidInstance {
        class: String,
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LowerError {
    /// Location in the class map (`Class.attribute` or `Class.instances`).
    pub fn location(&self) -> String {
        match self {
            LowerError::ConflictingKind {
                class, attribute, ..
            }
            | LowerError::MissingKind { class, attribute } => format!("{}.{}", class, attribute),
            LowerError::InvalidInstance { class, .. } => format!("{}.instances", class),
        }
    }

    pub fn class(&self) -> &str {
        match self {
            LowerError::ConflictingKind { class, .. }
            | LowerError::MissingKind { class, .. }
            | LowerError::InvalidInstance { class, .. } => class,
        }
    }
}

/// Phase that lowers the raw class map into typed descriptors.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Build typed class descriptors from the raw class map"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut model = ClassMap::new();

        for raw in &ctx.raw.classes {
            match lower_class(raw, &mut ctx.diagnostics) {
                Ok(class) => {
                    model.insert(class);
                }
                Err(err) => {
                    let location = err.location();
                    tracing::debug!(class = %raw.name, error = %err, "dropping class");
                    ctx.diagnostics
                        .push(Diagnostic::error("lower", err.to_string()).at(&location));
                    ctx.failures.push(ClassFailure {
                        class: err.class().to_string(),
                        location,
                        message: err.to_string(),
                    });
                }
            }
        }

        ctx.model = Some(model);
        Ok(())
    }
}

fn lower_class(
    raw: &RawClass,
    diagnostics: &mut Vec<Diagnostic>,
) -> std::result::Result<ClassDescriptor, LowerError> {
    let attributes = raw
        .attributes
        .iter()
        .map(|attr| lower_attribute(raw, attr))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let instances = raw
        .instances
        .iter()
        .map(|instance| lower_instance(raw, instance, diagnostics))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ClassDescriptor {
        name: raw.name.clone(),
        super_class: raw
            .super_class
            .as_deref()
            .map(strip_fragment)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        stereotype: raw
            .stereotype
            .as_deref()
            .map(Stereotype::from_label)
            .unwrap_or_default(),
        namespace: raw.namespace.clone(),
        origin_profiles: dedup(&raw.origin),
        attributes,
        instances,
        comment: raw.comment.clone(),
    })
}

fn lower_attribute(
    class: &RawClass,
    raw: &RawAttribute,
) -> std::result::Result<AttributeDescriptor, LowerError> {
    let data_type = raw.data_type.as_deref().map(strip_fragment);
    let range = raw.range.as_deref().map(strip_fragment);

    let kind = match (data_type, range) {
        (Some(data_type), Some(range)) if data_type != range => {
            return Err(LowerError::ConflictingKind {
                class: class.name.clone(),
                attribute: raw.label.clone(),
                data_type: data_type.to_string(),
                range: range.to_string(),
            });
        }
        (Some(name), _) => AttributeKind::Datatype {
            name: name.to_string(),
        },
        (None, Some(range)) => AttributeKind::Reference {
            range: range.to_string(),
        },
        (None, None) if raw.multiplicity.is_some() => AttributeKind::UntypedReference,
        (None, None) => {
            return Err(LowerError::MissingKind {
                class: class.name.clone(),
                attribute: raw.label.clone(),
            });
        }
    };

    Ok(AttributeDescriptor {
        label: raw.label.clone(),
        domain: raw
            .domain
            .as_deref()
            .map(strip_fragment)
            .unwrap_or(&class.name)
            .to_string(),
        namespace: raw.namespace.clone().or_else(|| class.namespace.clone()),
        kind,
        multiplicity: raw.multiplicity.clone(),
        inverse: raw.inverse_role.as_deref().map(|role| {
            InverseEnd::new(strip_fragment(role), raw.inverse_multiplicity.clone())
        }),
        is_fixed: raw.is_fixed.clone(),
        origin_profiles: dedup(&raw.origin),
        comment: raw.comment.clone(),
    })
}

#[derive(Deserialize)]
struct EmbeddedInstance {
    label: String,
    #[serde(rename = "type", default)]
    type_name: Option<String>,
    #[serde(default)]
    comment: Option<String>,
}

fn lower_instance(
    class: &RawClass,
    raw: &RawInstance,
    diagnostics: &mut Vec<Diagnostic>,
) -> std::result::Result<EnumInstance, LowerError> {
    let (label, type_name, comment) = match raw {
        RawInstance::Structured {
            label,
            type_name,
            comment,
        } => (label.clone(), type_name.clone(), comment.clone()),
        RawInstance::Embedded(text) => {
            let parsed = match serde_json::from_str::<EmbeddedInstance>(text) {
                Ok(parsed) => parsed,
                Err(_) => {
                    // One retry with HTML-escaped quotes decoded
                    let normalized = text.replace("&quot;", "\"");
                    let parsed = serde_json::from_str::<EmbeddedInstance>(&normalized)
                        .map_err(|source| LowerError::InvalidInstance {
                            class: class.name.clone(),
                            text: text.clone(),
                            source,
                        })?;
                    diagnostics.push(
                        Diagnostic::warning(
                            "lower",
                            format!("decoded escaped quotes in instance '{}'", parsed.label),
                        )
                        .at(format!("{}.instances", class.name)),
                    );
                    parsed
                }
            };
            (parsed.label, parsed.type_name, parsed.comment)
        }
    };

    Ok(EnumInstance {
        label,
        type_name: type_name
            .as_deref()
            .map(strip_fragment)
            .unwrap_or(&class.name)
            .to_string(),
        comment,
    })
}

fn dedup(profiles: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(profiles.len());
    for profile in profiles {
        if !unique.contains(profile) {
            unique.push(profile.clone());
        }
    }
    unique
}
