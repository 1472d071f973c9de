//! The type and relationship mapping engine.
//!
//! Per class, [`decide`] picks the artifact kind. Per attribute of an
//! emitted class, [`classify`] builds the field shape and, for class
//! references, [`resolve`] classifies the relationship against an
//! [`AssociationRegistry`] scoped to one planning pass.

mod classify;
mod emission;
mod multiplicity;
mod primitive;
mod registry;
mod resolve;

pub use classify::{FieldKind, FieldPlan, ScalarType, classify, pluralize};
pub use emission::{EmissionRules, EmitKind, SkipReason, decide};
pub use multiplicity::{
    MULTIPLICITY_OVERRIDES, Multiplicity, MultiplicityError, MultiplicityOverride, Upper,
    effective_multiplicity, is_plural_role, parse_multiplicity,
};
pub use primitive::{MappedPrimitive, ScalarSource, map_primitive};
pub use registry::{AssociationKey, AssociationRegistry, AttributeRef, TableKey};
pub use resolve::{Cardinality, OneToOneSide, Resolution, resolve};
