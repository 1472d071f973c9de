//! Primitive datatype mapping.

use cimgen_core::Primitive;
use serde::Serialize;

/// How a scalar type was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarSource {
    /// The datatype name is a recognized primitive.
    Recognized,
    /// The datatype is a measurement/float wrapper class, carried as Float.
    CimDatatype,
    /// The datatype is unknown and fell back to Float.
    Fallback,
}

/// Result of mapping a datatype name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MappedPrimitive {
    pub primitive: Primitive,
    pub source: ScalarSource,
}

/// Map a UML datatype name to a primitive, ignoring case.
///
/// Unrecognized names map to [`Primitive::Float`] with
/// [`ScalarSource::Fallback`]; callers decide whether that is expected.
pub fn map_primitive(name: &str) -> MappedPrimitive {
    match Primitive::from_name(name) {
        Some(primitive) => MappedPrimitive {
            primitive,
            source: ScalarSource::Recognized,
        },
        None => MappedPrimitive {
            primitive: Primitive::Float,
            source: ScalarSource::Fallback,
        },
    }
}
