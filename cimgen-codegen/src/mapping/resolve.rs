//! Relationship cardinality resolution.

use std::fmt;

use cimgen_ir::AttributeDescriptor;
use serde::Serialize;

use super::{
    AssociationKey, AssociationRegistry, AttributeRef, Multiplicity, MultiplicityError, TableKey,
    effective_multiplicity, is_plural_role,
};
use crate::{pipeline::Diagnostic, target::TargetConfig};

/// Which end of a one-to-one association holds the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OneToOneSide {
    Owner,
    Owned,
}

/// Relationship cardinality seen from the attribute's own end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "cardinality", content = "side", rename_all = "snake_case")]
pub enum Cardinality {
    OneToOne(OneToOneSide),
    /// This end is single-valued and stores the key.
    OneToMany,
    /// This end is multi-valued; the other end stores the key.
    ManyToOne,
    ManyToMany,
    /// Missing inverse or multiplicity.
    Unclassified,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::OneToOne(OneToOneSide::Owner) => write!(f, "one-to-one (owner)"),
            Cardinality::OneToOne(OneToOneSide::Owned) => write!(f, "one-to-one (owned)"),
            Cardinality::OneToMany => write!(f, "one-to-many"),
            Cardinality::ManyToOne => write!(f, "many-to-one"),
            Cardinality::ManyToMany => write!(f, "many-to-many"),
            Cardinality::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// Outcome of resolving one association end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub cardinality: Cardinality,
    /// The registered join table for many-to-many ends.
    pub join_table: Option<TableKey>,
}

impl Resolution {
    fn of(cardinality: Cardinality) -> Self {
        Self {
            cardinality,
            join_table: None,
        }
    }
}

/// Classify the relationship an attribute takes part in.
///
/// Both ends are read through [`effective_multiplicity`] with their own
/// labels. The plural-role heuristic only applies against a single-valued
/// opposite end: a plural `M:1` end there is many-valued. One-to-one ends
/// probe the reverse key before the forward key, so the second end of a
/// pair never writes. Many-to-many ends share one join table per class
/// pair.
pub fn resolve(
    attr: &AttributeDescriptor,
    target: &TargetConfig,
    registry: &mut AssociationRegistry,
    diagnostics: &mut Vec<Diagnostic>,
) -> Resolution {
    let (Some(range), Some(inverse)) = (attr.range(), attr.inverse.as_ref()) else {
        return Resolution::of(Cardinality::Unclassified);
    };

    // Malformed tokens on this end are reported by the classifier
    let Ok(mut this_end) = effective_multiplicity(&attr.label, attr.multiplicity.as_deref(), false)
    else {
        return Resolution::of(Cardinality::Unclassified);
    };

    let mut other_end =
        match effective_multiplicity(inverse.label(), inverse.multiplicity.as_deref(), false) {
            Ok(multiplicity) => multiplicity,
            Err(MultiplicityError::Empty) => return Resolution::of(Cardinality::Unclassified),
            Err(err) => {
                diagnostics
                    .push(Diagnostic::warning("plan", format!("inverse {}", err)).at(attr.about()));
                return Resolution::of(Cardinality::Unclassified);
            }
        };

    if target.plural_role_heuristic && !other_end.is_many() {
        if is_plural_role(&attr.label, attr.multiplicity.as_deref()) {
            this_end = Multiplicity::AT_LEAST_ONE;
        } else if !this_end.is_many()
            && is_plural_role(inverse.label(), inverse.multiplicity.as_deref())
        {
            other_end = Multiplicity::AT_LEAST_ONE;
        }
    }

    let owner = AttributeRef::new(&attr.domain, &attr.label);
    match (this_end.is_many(), other_end.is_many()) {
        (false, false) => {
            let side =
                resolve_one_to_one(attr, range, inverse.label(), owner, registry, diagnostics);
            Resolution::of(Cardinality::OneToOne(side))
        }
        (false, true) => Resolution::of(Cardinality::OneToMany),
        (true, false) => Resolution::of(Cardinality::ManyToOne),
        (true, true) => {
            let forward = TableKey::new(&attr.domain, range);
            let key = match registry.find_table(&forward) {
                Some(existing) => existing.clone(),
                None => {
                    registry.register_table(forward.clone(), owner);
                    forward
                }
            };
            Resolution {
                cardinality: Cardinality::ManyToMany,
                join_table: Some(key),
            }
        }
    }
}

fn resolve_one_to_one(
    attr: &AttributeDescriptor,
    range: &str,
    inverse_label: &str,
    owner: AttributeRef,
    registry: &mut AssociationRegistry,
    diagnostics: &mut Vec<Diagnostic>,
) -> OneToOneSide {
    let reverse = AssociationKey::new(range, &attr.domain, inverse_label);
    if registry.contains_association(&reverse) {
        return OneToOneSide::Owned;
    }

    let forward = AssociationKey::new(&attr.domain, range, &attr.label);
    if let Some(existing) = registry.association_owner(&forward) {
        diagnostics.push(
            Diagnostic::warning(
                "plan",
                format!(
                    "duplicate one-to-one declaration of {} (first declared by {})",
                    forward, existing
                ),
            )
            .at(attr.about()),
        );
        return OneToOneSide::Owner;
    }

    registry.register_association(forward, owner);
    OneToOneSide::Owner
}
