//! Python type mapper implementation.

use cimgen_core::{Primitive, ScalarTypeMapper};

/// Python type mapper, parameterized by how temporal values are carried.
#[derive(Debug, Clone, Copy)]
pub struct PythonTypeMapper {
    target: &'static str,
    identifier: &'static str,
    date_time: &'static str,
    date: &'static str,
    time: &'static str,
}

/// ORM columns: `datetime` and `time` are native, dates are text.
pub const SQLALCHEMY_TYPES: PythonTypeMapper = PythonTypeMapper {
    target: "sqlalchemy",
    identifier: "str",
    date_time: "datetime",
    date: "str",
    time: "time",
};

/// Pydantic models carry every temporal value as text.
pub const PYDANTIC_TYPES: PythonTypeMapper = PythonTypeMapper {
    target: "pydantic",
    identifier: "uuid.UUID",
    date_time: "str",
    date: "str",
    time: "str",
};

/// Dataclass fields carry every temporal value as text.
pub const DATACLASS_TYPES: PythonTypeMapper = PythonTypeMapper {
    target: "dataclass",
    identifier: "str",
    date_time: "str",
    date: "str",
    time: "str",
};

/// Python data types exposed by primitive classes.
pub const PRIMITIVE_DATA_TYPES: PythonTypeMapper = PythonTypeMapper {
    target: "dataclass",
    identifier: "str",
    date_time: "datetime",
    date: "date",
    time: "time",
};

impl ScalarTypeMapper for PythonTypeMapper {
    fn target(&self) -> &'static str {
        self.target
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Integer => "int",
            Primitive::Boolean => "bool",
            Primitive::String | Primitive::MonthDay => "str",
            Primitive::DateTime => self.date_time,
            Primitive::Date => self.date,
            Primitive::Time => self.time,
            Primitive::Float => "float",
        }
    }

    fn map_identifier(&self) -> &'static str {
        self.identifier
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("Optional[{}]", inner)
    }

    fn map_list(&self, inner: &str) -> String {
        format!("List[{}]", inner)
    }
}
