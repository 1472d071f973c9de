//! Go type mapper implementation.

use cimgen_core::{Primitive, ScalarTypeMapper};

/// Go type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl ScalarTypeMapper for GoTypeMapper {
    fn target(&self) -> &'static str {
        "go"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Integer => "int64",
            Primitive::Boolean => "bool",
            Primitive::Float => "float64",
            _ => "string",
        }
    }

    fn map_identifier(&self) -> &'static str {
        "string"
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("*{}", inner)
    }

    fn map_list(&self, inner: &str) -> String {
        format!("[]{}", inner)
    }

    // A nil slice already means "absent"
    fn map_optional_list(&self, inner: &str) -> String {
        self.map_list(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_primitives_are_strings() {
        for primitive in Primitive::ALL.into_iter().filter(Primitive::is_textual) {
            assert_eq!(GoTypeMapper.map_primitive(primitive), "string");
        }
        assert_eq!(GoTypeMapper.map_primitive(Primitive::Integer), "int64");
        assert_eq!(GoTypeMapper.map_primitive(Primitive::Float), "float64");
    }

    #[test]
    fn test_no_optional_slices() {
        assert_eq!(GoTypeMapper.map_optional("string"), "*string");
        assert_eq!(GoTypeMapper.map_optional_list("resource"), "[]resource");
    }
}
