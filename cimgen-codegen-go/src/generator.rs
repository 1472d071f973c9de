use cimgen_codegen::{
    AttributeOutput, Backend, ClassOutput, ClassPlan, PlannedField, TargetConfig,
    mapping::{EmissionRules, EmitKind, ScalarType},
    naming::GO_NAMING,
    wrap_type,
};
use cimgen_core::{Primitive, ScalarTypeMapper};
use cimgen_ir::{ClassMap, EnumInstance};

use crate::GoTypeMapper;

/// Namespace used in XML tags when an attribute declares none.
pub const CIM_NAMESPACE: &str = "http://iec.ch/TC57/CIM100#";

/// Element type of every class reference. References are serialized as
/// `rdf:resource` identifiers, not nested structs.
const RESOURCE: &str = "resource";

/// Go backend producing `encoding/xml` tagged structs.
#[derive(Debug, Clone)]
pub struct GoBackend {
    namespace: String,
}

impl Default for GoBackend {
    fn default() -> Self {
        Self {
            namespace: CIM_NAMESPACE.to_string(),
        }
    }
}

impl GoBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback namespace for XML tags.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    fn render_field(&self, planned: &PlannedField) -> AttributeOutput {
        let attr = &planned.attribute;
        let field = &planned.field;

        let element = match &field.scalar {
            ScalarType::Identifier => GoTypeMapper.map_identifier().to_string(),
            ScalarType::Primitive(mapped) => {
                GoTypeMapper.map_primitive(mapped.primitive).to_string()
            }
            ScalarType::Enum { name } => name.clone(),
            ScalarType::Class { .. } | ScalarType::Untyped => RESOURCE.to_string(),
        };
        let type_expr = wrap_type(&GoTypeMapper, &element, field.multiplicity);

        let tag = if attr.is_identity() {
            "`xml:\"ID,attr\"`".to_string()
        } else {
            let namespace = attr.namespace.as_deref().unwrap_or(&self.namespace);
            format!("`xml:\"{} {}\"`", namespace, attr.about())
        };

        AttributeOutput {
            field_name: field.emitted_name.clone(),
            declaration: format!("{} {} {}", field.emitted_name, type_expr, tag),
            type_expr,
            annotation: Some(tag),
            ..AttributeOutput::default()
        }
    }
}

impl Backend for GoBackend {
    fn name(&self) -> &'static str {
        "go"
    }

    fn config(&self) -> TargetConfig {
        TargetConfig::new("go", GO_NAMING)
            .with_suffixes("Id", "Ids")
            .with_rules(EmissionRules {
                skip_primitives: true,
                skip_cim_datatypes: true,
                ..EmissionRules::default()
            })
    }

    fn render_class(&self, class: &ClassPlan, model: &ClassMap) -> ClassOutput {
        let output = ClassOutput::new(class);
        match class.emit {
            EmitKind::Enum => {
                let instances = model
                    .get(&class.name)
                    .map(|c| c.instances.as_slice())
                    .unwrap_or_default();
                ClassOutput {
                    header: vec![format!("type {} string", class.name)],
                    ..output
                }
                .with_literals(instances, enum_constant)
            }
            EmitKind::PrimitiveSchema => {
                let primitive = Primitive::from_name(&class.name).unwrap_or(Primitive::Float);
                ClassOutput {
                    header: vec![format!(
                        "type {} {}",
                        class.name,
                        GoTypeMapper.map_primitive(primitive)
                    )],
                    ..output
                }
            }
            EmitKind::ObjectSchema => ClassOutput {
                // Embedded parent struct
                header: class.super_class.iter().cloned().collect(),
                attributes: class
                    .fields
                    .iter()
                    .map(|planned| self.render_field(planned))
                    .collect(),
                ..output
            },
            EmitKind::Skip(_) => output,
        }
    }
}

fn enum_constant(instance: &EnumInstance) -> String {
    let constant = format!(
        "{0}_{1} {0} = \"{1}\"",
        instance.type_name, instance.label
    );
    match &instance.comment {
        Some(comment) => format!("{} //{}", constant, comment),
        None => constant,
    }
}

#[cfg(test)]
mod tests {
    use cimgen_codegen::mapping::{Cardinality, FieldKind, FieldPlan, Multiplicity};
    use cimgen_ir::{AttributeDescriptor, AttributeKind};

    use super::*;

    #[test]
    fn test_enum_constant() {
        let instance = EnumInstance {
            label: "open".into(),
            type_name: "SwitchState".into(),
            comment: Some("Switch is open".into()),
        };
        assert_eq!(
            enum_constant(&instance),
            "SwitchState_open SwitchState = \"open\" //Switch is open"
        );
    }

    #[test]
    fn test_attribute_namespace_wins() {
        let mut attr = AttributeDescriptor::new(
            "Bay",
            "Substation",
            AttributeKind::Reference {
                range: "Substation".into(),
            },
        );
        attr.namespace = Some("http://example.com/ext#".into());
        let planned = PlannedField {
            attribute: attr,
            field: FieldPlan {
                kind: FieldKind::Reference,
                emitted_name: "SubstationId".into(),
                scalar: ScalarType::Class {
                    name: "Substation".into(),
                },
                multiplicity: Multiplicity::OPTIONAL,
            },
            cardinality: Cardinality::Unclassified,
            join_table: None,
        };

        let output = GoBackend::new().render_field(&planned);
        insta::assert_snapshot!(
            output.declaration,
            @r#"SubstationId *resource `xml:"http://example.com/ext# Bay.Substation"`"#
        );
    }
}
