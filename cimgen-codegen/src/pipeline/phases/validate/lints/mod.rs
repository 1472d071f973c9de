//! Built-in lints for class map validation.

mod dangling_reference;
mod duplicate_class;
mod inheritance_cycle;

pub use dangling_reference::DanglingReferenceLint;
pub use duplicate_class::DuplicateClassLint;
pub use inheritance_cycle::InheritanceCycleLint;
