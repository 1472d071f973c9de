//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the raw class map
//! - [`LowerPhase`] - builds the typed class map
//! - [`PlanPhase`] - plans every class for the target

mod lower;
mod plan;
mod validate;

pub use lower::{LowerError, LowerPhase};
pub use plan::PlanPhase;
pub use validate::{
    DanglingReferenceLint, DuplicateClassLint, InheritanceCycleLint, Lint, LintInfo,
    ValidatePhase,
};
