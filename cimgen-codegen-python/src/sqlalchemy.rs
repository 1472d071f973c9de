//! SQLAlchemy declarative ORM backend.
//!
//! Every emitted class maps to one table keyed by `mRID`. Subclasses use
//! joined-table inheritance: their `mRID` is also a foreign key to the
//! parent table. Relationship ends are rendered from the resolved
//! cardinality, so only the key-holding end declares a foreign key column.

use cimgen_codegen::{
    AttributeOutput, Backend, ClassOutput, ClassPlan, JoinTable, PlannedField, TargetConfig,
    mapping::{Cardinality, EmissionRules, EmitKind, Multiplicity, OneToOneSide, ScalarType},
    naming::PYTHON_LOWER_NAMING,
    wrap_type,
};
use cimgen_core::{Primitive, ScalarTypeMapper, lower_first, to_table_name};
use cimgen_ir::ClassMap;

use crate::type_mapper::SQLALCHEMY_TYPES;

const BUILTINS: &[&str] = &[
    "Float",
    "Integer",
    "String",
    "Boolean",
    "Date",
    "DateTime",
    "MonthDay",
    "PositionPoint",
    "Decimal",
];

/// SQLAlchemy 2.0 `Mapped[...]` backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlalchemyBackend;

impl Backend for SqlalchemyBackend {
    fn name(&self) -> &'static str {
        "sqlalchemy"
    }

    fn config(&self) -> TargetConfig {
        TargetConfig::new("sqlalchemy", PYTHON_LOWER_NAMING)
            .with_plural_role_heuristic()
            .with_rules(EmissionRules {
                builtin_names: BUILTINS,
                skip_primitives: true,
                skip_cim_datatypes: true,
                skip_version_classes: true,
                skip_unit_classes: true,
                skip_enumerations: true,
                required_profiles: vec!["EQ".into(), "GL".into()],
                excluded_profiles: Vec::new(),
            })
    }

    fn render_class(&self, class: &ClassPlan, _model: &ClassMap) -> ClassOutput {
        let mut output = ClassOutput::new(class);
        if class.emit != EmitKind::ObjectSchema {
            return output;
        }

        output.header = header(class);
        output.attributes = class
            .fields
            .iter()
            .filter_map(render_field)
            .collect();
        output
    }

    fn render_join_table(&self, table: &JoinTable) -> Option<String> {
        let name = to_table_name(&table.key.canonical_name());
        let domain = to_table_name(&table.key.domain);
        let range = to_table_name(&table.key.range);
        Some(format!(
            "{name} = Table(\"{name}\", Base.metadata, \
             Column(\"{domain}_mRID\", ForeignKey(\"{domain}.mRID\"), primary_key=True),\
             Column(\"{range}_mRID\", ForeignKey(\"{range}.mRID\"), primary_key=True))"
        ))
    }
}

fn header(class: &ClassPlan) -> Vec<String> {
    let table = to_table_name(&class.name);
    let mut lines = vec![format!("__tablename__ = \"{}\"", table)];

    if class.flags.needs_mapper {
        lines.push(format!(
            "__mapper_args__ = {{\"polymorphic_identity\": \"{}\", \"polymorphic_on\": \"objectType\"}}",
            table
        ));
    }

    match &class.super_class {
        Some(parent) => {
            let parent = to_table_name(parent);
            lines.push(format!(
                "mRID: Mapped[str] = mapped_column(String(255),\
                 ForeignKey(column=\"{parent}.mRID\", name=\"fk_{table}_{parent}\"),primary_key=True)"
            ));
        }
        None => {
            lines.push("mRID: Mapped[str] = mapped_column(String(255), primary_key=True)".into());
        }
    }

    if class.flags.needs_polymorphic_discriminator {
        lines.push("objectType: Mapped[str] = mapped_column(String(255))".into());
    }
    lines
}

fn render_field(planned: &PlannedField) -> Option<AttributeOutput> {
    let field = &planned.field;
    match &field.scalar {
        // Declared in the class header
        ScalarType::Identifier => None,
        ScalarType::Primitive(mapped) => Some(column(
            &field.emitted_name,
            SQLALCHEMY_TYPES.map_primitive(mapped.primitive),
            column_type(mapped.primitive),
            field.multiplicity,
        )),
        ScalarType::Enum { .. } => Some(column(
            &field.emitted_name,
            "str",
            "String(255)",
            field.multiplicity,
        )),
        ScalarType::Class { .. } | ScalarType::Untyped => relationship(planned),
    }
}

fn column_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Integer => "Integer",
        Primitive::Boolean => "Boolean",
        Primitive::String | Primitive::MonthDay | Primitive::Date | Primitive::Time => {
            "String(255)"
        }
        Primitive::DateTime => "DateTime",
        Primitive::Float => "Float",
    }
}

fn column(
    name: &str,
    python_type: &str,
    column: &str,
    multiplicity: Multiplicity,
) -> AttributeOutput {
    let type_expr = wrap_type(&SQLALCHEMY_TYPES, python_type, multiplicity);
    let annotation = format!("mapped_column({})", column);
    AttributeOutput {
        field_name: name.to_string(),
        declaration: format!("{}: Mapped[{}] = {}", name, type_expr, annotation),
        type_expr,
        annotation: Some(annotation),
        ..AttributeOutput::default()
    }
}

fn relationship(planned: &PlannedField) -> Option<AttributeOutput> {
    let attr = &planned.attribute;
    let field = &planned.field;
    let range = field.scalar.type_name()?;
    let inverse = attr.inverse.as_ref()?;

    let name = &field.emitted_name;
    let back = lower_first(inverse.label());
    let type_expr = wrap_type(&SQLALCHEMY_TYPES, range, field.multiplicity);

    let (relationship, foreign_key) = match planned.cardinality {
        Cardinality::OneToMany | Cardinality::OneToOne(OneToOneSide::Owned) => {
            let key_type = if field.is_optional() { "str|None" } else { "str" };
            let range_table = to_table_name(range);
            let foreign_key = format!(
                "{name}_id: Mapped[{key_type}] = mapped_column(ForeignKey(\
                 column=\"{range_table}.mRID\",name=\"fk_{range_table}_{}_{}\",use_alter=True))",
                to_table_name(&attr.domain),
                to_table_name(&attr.label),
            );
            (
                format!("relationship(back_populates=\"{back}\", foreign_keys=[{name}_id])"),
                Some(foreign_key),
            )
        }
        Cardinality::ManyToOne | Cardinality::OneToOne(OneToOneSide::Owner) => (
            format!(
                "relationship(primaryjoin=\"{}.mRID=={}.{back}_id\",back_populates=\"{back}\", post_update=True)",
                attr.domain, range
            ),
            None,
        ),
        Cardinality::ManyToMany => {
            let table = to_table_name(&planned.join_table.as_ref()?.canonical_name());
            (
                format!("relationship(secondary={table}, back_populates=\"{back}\")"),
                None,
            )
        }
        Cardinality::Unclassified => {
            tracing::debug!(
                attribute = %attr.about(),
                "no relationship rendered for unclassified reference"
            );
            return None;
        }
    };

    let line = format!("{}: Mapped[{}]  =  {}", name, type_expr, relationship);
    let declaration = match &foreign_key {
        Some(key) => format!("{}\n    {}", key, line),
        None => line,
    };

    Some(AttributeOutput {
        field_name: name.clone(),
        type_expr,
        relationship: Some(relationship),
        foreign_key,
        declaration,
        ..AttributeOutput::default()
    })
}
