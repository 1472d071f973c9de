//! Intermediate representation types for the cimgen CIM code generator.
//!
//! This crate provides the typed descriptors the mapping engine consumes.
//! They are produced once from the loader output and stay read-only for
//! the rest of a generation run.
//!
//! # Architecture
//!
//! ```text
//! class map (JSON) → cimgen-model (parsing) → cimgen-ir (typed descriptors) → codegen
//! ```
//!
//! Presence and absence of loader keys become enum variants here, so an
//! attribute is either a datatype, a class reference, or an untyped
//! reference, never a bag of optional strings.

mod attribute;
mod class;
mod model;

pub use attribute::{AttributeDescriptor, AttributeKind, InverseEnd};
pub use class::{ClassDescriptor, EnumInstance, Stereotype};
pub use model::ClassMap;
