//! Pydantic model backend.

use cimgen_codegen::{
    AttributeOutput, Backend, ClassOutput, ClassPlan, PlannedField, TargetConfig,
    mapping::{EmissionRules, EmitKind, FieldKind, Multiplicity},
    naming::PYTHON_NAMING,
    wrap_type,
};
use cimgen_ir::ClassMap;

use crate::{
    common::{enum_literal, instances, primitive_data_type, relative_imports, scalar_name},
    type_mapper::PYDANTIC_TYPES,
};

const BUILTINS: &[&str] = &["Float", "Integer", "String", "Boolean", "Date"];

/// Pydantic v2 backend. Reference collections get a wrap validator that
/// breaks cycles between mutually referencing models.
#[derive(Debug, Clone, Copy, Default)]
pub struct PydanticBackend;

impl Backend for PydanticBackend {
    fn name(&self) -> &'static str {
        "pydantic"
    }

    fn config(&self) -> TargetConfig {
        TargetConfig::new("pydantic", PYTHON_NAMING).with_rules(EmissionRules {
            builtin_names: BUILTINS,
            ..EmissionRules::default()
        })
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
                imports: relative_imports(class, true),
                attributes: class.fields.iter().map(render_field).collect(),
                ..output
            },
            EmitKind::Skip(_) => output,
        }
    }
}

fn render_field(planned: &PlannedField) -> AttributeOutput {
    let field = &planned.field;
    let name = &field.emitted_name;
    let type_expr = wrap_type(
        &PYDANTIC_TYPES,
        &scalar_name(&PYDANTIC_TYPES, &field.scalar),
        field.multiplicity,
    );
    let default_expr = default_value(planned);
    let validator = (field.kind == FieldKind::Collection).then(|| {
        format!(
            "val_{0}_wrap = field_validator(\"{0}\", mode=\"wrap\")(cyclic_references_validator)",
            name
        )
    });

    AttributeOutput {
        field_name: name.clone(),
        declaration: format!(
            "{}: {}{}",
            name,
            type_expr,
            default_expr.as_deref().unwrap_or_default()
        ),
        type_expr,
        default_expr,
        validator,
        ..AttributeOutput::default()
    }
}

fn default_value(planned: &PlannedField) -> Option<String> {
    let attr = &planned.attribute;
    match (attr.range(), attr.is_fixed.as_deref()) {
        (Some(range), Some(fixed)) => Some(format!(" = {}.{}", range, fixed)),
        (Some(_), None) if planned.field.multiplicity == Multiplicity::MANY => {
            Some(" = None".to_string())
        }
        (None, Some(fixed)) => Some(format!(" = \"{}\"", fixed)),
        _ => None,
    }
}
