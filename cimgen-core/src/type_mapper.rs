//! Scalar types and their mapping to target-specific type names.

use std::fmt;

use serde::Serialize;

/// UML primitive datatypes recognized by the generator.
///
/// This is a target-agnostic representation. Use [`ScalarTypeMapper`] to
/// convert to target type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
    Integer,
    Boolean,
    String,
    DateTime,
    MonthDay,
    Date,
    Time,
    Float,
}

impl Primitive {
    /// All recognized primitives, in declaration order.
    pub const ALL: [Primitive; 8] = [
        Primitive::Integer,
        Primitive::Boolean,
        Primitive::String,
        Primitive::DateTime,
        Primitive::MonthDay,
        Primitive::Date,
        Primitive::Time,
        Primitive::Float,
    ];

    /// Get the UML datatype name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Integer => "Integer",
            Primitive::Boolean => "Boolean",
            Primitive::String => "String",
            Primitive::DateTime => "DateTime",
            Primitive::MonthDay => "MonthDay",
            Primitive::Date => "Date",
            Primitive::Time => "Time",
            Primitive::Float => "Float",
        }
    }

    /// Look up a primitive by UML datatype name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns true for primitives whose values are text on the wire.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            Primitive::String
                | Primitive::DateTime
                | Primitive::MonthDay
                | Primitive::Date
                | Primitive::Time
        )
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for mapping scalar types to target-specific type strings.
///
/// Implement this trait for each target to provide type mappings.
pub trait ScalarTypeMapper {
    /// The target name
    fn target(&self) -> &'static str;

    /// Map a primitive to a target type string
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// The type used for the `mRID` identity attribute
    fn map_identifier(&self) -> &'static str;

    /// Wrap a type as optional (e.g., `Optional[str]`, `*string`)
    fn map_optional(&self, inner: &str) -> String;

    /// Wrap a type as a collection (e.g., `List[str]`, `[]string`)
    fn map_list(&self, inner: &str) -> String;

    /// Wrap a type as an optional collection (e.g., `Optional[List[str]]`)
    fn map_optional_list(&self, inner: &str) -> String {
        // Default implementation - targets without optional slices override
        self.map_optional(&self.map_list(inner))
    }
}
