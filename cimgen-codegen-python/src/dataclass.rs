//! Plain dataclass backend.
//!
//! References are carried as `mRID` strings rather than nested objects, so
//! every field has a default and instances can be built incrementally
//! while a profile is parsed.

use cimgen_codegen::{
    AttributeOutput, Backend, ClassOutput, ClassPlan, PlannedField, TargetConfig,
    mapping::{EmitKind, FieldKind, ScalarType},
    naming::PYTHON_NAMING,
};
use cimgen_core::{Primitive, ScalarTypeMapper};
use cimgen_ir::ClassMap;

use crate::{
    common::{enum_literal, instances, primitive_data_type, relative_imports},
    type_mapper::DATACLASS_TYPES,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DataclassBackend;

impl Backend for DataclassBackend {
    fn name(&self) -> &'static str {
        "dataclass"
    }

    fn config(&self) -> TargetConfig {
        TargetConfig::new("dataclass", PYTHON_NAMING)
    }

    fn render_class(&self, class: &ClassPlan, model: &ClassMap) -> ClassOutput {
        let output = ClassOutput::new(class);
        match class.emit {
            EmitKind::Enum => output.with_literals(instances(class, model), enum_literal),
            EmitKind::PrimitiveSchema => ClassOutput {
                header: vec![primitive_data_type(class)],
                ..output
            },
            EmitKind::ObjectSchema => ClassOutput {
                imports: relative_imports(class, false),
                attributes: class.fields.iter().map(render_field).collect(),
                ..output
            },
            EmitKind::Skip(_) => output,
        }
    }
}

fn render_field(planned: &PlannedField) -> AttributeOutput {
    let field = &planned.field;
    let (type_expr, default_expr) = match (&field.scalar, field.kind) {
        (_, FieldKind::Collection) => ("list".to_string(), "default_factory=list"),
        (_, FieldKind::Reference) => ("Optional[str]".to_string(), "default=None"),
        (ScalarType::Enum { name }, _) => (format!("Optional[{}]", name), "default=None"),
        (ScalarType::Primitive(mapped), _) => (
            DATACLASS_TYPES.map_primitive(mapped.primitive).to_string(),
            primitive_default(mapped.primitive),
        ),
        (ScalarType::Identifier, _) => (
            DATACLASS_TYPES.map_identifier().to_string(),
            "default=\"\"",
        ),
        (ScalarType::Class { .. } | ScalarType::Untyped, _) => {
            ("Optional[str]".to_string(), "default=None")
        }
    };

    AttributeOutput {
        field_name: field.emitted_name.clone(),
        declaration: format!("{}: {} = field({})", field.emitted_name, type_expr, default_expr),
        type_expr,
        default_expr: Some(default_expr.to_string()),
        ..AttributeOutput::default()
    }
}

fn primitive_default(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Integer => "default=0",
        Primitive::Boolean => "default=False",
        Primitive::Float => "default=0.0",
        _ => "default=\"\"",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_defaults() {
        assert_eq!(primitive_default(Primitive::Integer), "default=0");
        assert_eq!(primitive_default(Primitive::MonthDay), "default=\"\"");
        assert_eq!(primitive_default(Primitive::Float), "default=0.0");
    }
}
