use cimgen_codegen::{ClassPlan, mapping::ScalarType};
use cimgen_core::{Primitive, ScalarTypeMapper};
use cimgen_ir::{ClassMap, EnumInstance};

use crate::type_mapper::{PRIMITIVE_DATA_TYPES, PythonTypeMapper};

/// Element type of a field before wrapping.
pub(crate) fn scalar_name(mapper: &PythonTypeMapper, scalar: &ScalarType) -> String {
    match scalar {
        ScalarType::Identifier => mapper.map_identifier().to_string(),
        ScalarType::Primitive(mapped) => mapper.map_primitive(mapped.primitive).to_string(),
        ScalarType::Enum { name } | ScalarType::Class { name } => name.clone(),
        ScalarType::Untyped => "str".to_string(),
    }
}

/// `label = "label"`, with the literal's comment appended.
pub(crate) fn enum_literal(instance: &EnumInstance) -> String {
    match &instance.comment {
        Some(comment) => format!("{0} = \"{0}\" #{1}", instance.label, comment),
        None => format!("{0} = \"{0}\"", instance.label),
    }
}

pub(crate) fn instances<'a>(class: &ClassPlan, model: &'a ClassMap) -> &'a [EnumInstance] {
    model
        .get(&class.name)
        .map(|c| c.instances.as_slice())
        .unwrap_or_default()
}

/// The Python data type a primitive class stands for.
pub(crate) fn primitive_data_type(class: &ClassPlan) -> String {
    let primitive = Primitive::from_name(&class.name).unwrap_or(Primitive::Float);
    format!("data_type = {}", PRIMITIVE_DATA_TYPES.map_primitive(primitive))
}

/// Sorted unique `from .X import X` lines for the classes a plan refers to.
pub(crate) fn relative_imports(class: &ClassPlan, include_classes: bool) -> Vec<String> {
    let mut names: Vec<&str> = class
        .fields
        .iter()
        .filter_map(|f| match &f.field.scalar {
            ScalarType::Enum { name } => Some(name.as_str()),
            ScalarType::Class { name } if include_classes => Some(name.as_str()),
            _ => None,
        })
        .filter(|name| *name != class.name)
        .collect();
    names.sort_unstable();
    names.dedup();
    names
        .into_iter()
        .map(|name| format!("from .{0} import {0}", name))
        .collect()
}
