//! Core utilities and types for the cimgen CIM code generator.
//!
//! This crate provides the scalar vocabulary shared by the mapping engine
//! and every target backend, plus the string helpers used for naming.

mod type_mapper;
mod utils;

// Scalar types
pub use type_mapper::{Primitive, ScalarTypeMapper};
// String utilities
pub use utils::{lower_first, strip_fragment, to_snake_case, to_table_name, upper_first};
