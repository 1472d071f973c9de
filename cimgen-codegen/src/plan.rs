//! Per-class plans produced by one planning pass.
//!
//! A plan is target-specific but textless: backends render it into
//! strings. Each call to [`plan_model`] owns a fresh
//! [`AssociationRegistry`], so planning the same model twice gives the
//! same result.

use cimgen_core::to_table_name;
use cimgen_ir::{AttributeDescriptor, ClassMap};
use serde::Serialize;

use crate::{
    mapping::{
        AssociationRegistry, AttributeRef, Cardinality, EmitKind, FieldPlan, TableKey, classify,
        decide, resolve,
    },
    pipeline::Diagnostic,
    target::TargetConfig,
};

/// One attribute of an emitted class.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedField {
    pub attribute: AttributeDescriptor,
    pub field: FieldPlan,
    pub cardinality: Cardinality,
    pub join_table: Option<TableKey>,
}

/// Structural needs of an emitted class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassFlags {
    /// No super class, so the class declares its own identity column.
    pub needs_id: bool,
    /// Root of a hierarchy.
    pub needs_polymorphic_discriminator: bool,
    /// Part of a hierarchy.
    pub needs_mapper: bool,
    pub needs_many_to_many: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassPlan {
    pub name: String,
    pub emit: EmitKind,
    /// Super class, only when it is present in the model.
    pub super_class: Option<String>,
    pub fields: Vec<PlannedField>,
    pub flags: ClassFlags,
}

impl ClassPlan {
    pub fn field(&self, label: &str) -> Option<&PlannedField> {
        self.fields.iter().find(|f| f.attribute.label == label)
    }
}

/// A join table registered during planning.
#[derive(Debug, Clone, Serialize)]
pub struct JoinTable {
    pub key: TableKey,
    /// Table name derived from the canonical pair name.
    pub table_name: String,
    pub declared_by: AttributeRef,
}

/// A class dropped from the model because it could not be lowered.
#[derive(Debug, Clone, Serialize)]
pub struct ClassFailure {
    pub class: String,
    pub location: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelPlan {
    pub classes: Vec<ClassPlan>,
    pub join_tables: Vec<JoinTable>,
    pub failures: Vec<ClassFailure>,
}

impl ModelPlan {
    pub fn class(&self, name: &str) -> Option<&ClassPlan> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn emitted(&self) -> impl Iterator<Item = &ClassPlan> {
        self.classes.iter().filter(|c| !c.emit.is_skip())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ClassPlan> {
        self.classes.iter().filter(|c| c.emit.is_skip())
    }
}

/// Plan every class of `model` for `target`, in model order.
pub fn plan_model(
    model: &ClassMap,
    target: &TargetConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> ModelPlan {
    let mut registry = AssociationRegistry::new();
    let mut classes = Vec::with_capacity(model.len());

    for class in model.iter() {
        let emit = decide(class, &target.rules);
        let super_class = class
            .super_class
            .as_deref()
            .filter(|name| model.contains(name))
            .map(str::to_string);

        let mut fields = Vec::new();
        if emit == EmitKind::ObjectSchema {
            for attr in &class.attributes {
                if !target.rules.accepts_profiles(&attr.origin_profiles) {
                    continue;
                }
                let field = classify(attr, model, target, diagnostics);
                let resolution = if field.kind.is_reference() {
                    Some(resolve(attr, target, &mut registry, diagnostics))
                } else {
                    None
                };
                let (cardinality, join_table) = match resolution {
                    Some(r) => (r.cardinality, r.join_table),
                    None => (Cardinality::Unclassified, None),
                };
                fields.push(PlannedField {
                    attribute: attr.clone(),
                    field,
                    cardinality,
                    join_table,
                });
            }
        }

        let has_sub_classes = model.has_sub_classes(&class.name);
        let flags = ClassFlags {
            needs_id: super_class.is_none(),
            needs_polymorphic_discriminator: super_class.is_none() && has_sub_classes,
            needs_mapper: has_sub_classes || super_class.is_some(),
            needs_many_to_many: fields
                .iter()
                .any(|f| f.cardinality == Cardinality::ManyToMany),
        };

        tracing::debug!(class = %class.name, %emit, fields = fields.len(), "planned class");
        classes.push(ClassPlan {
            name: class.name.clone(),
            emit,
            super_class,
            fields,
            flags,
        });
    }

    let join_tables = registry
        .join_tables()
        .map(|(key, declared_by)| JoinTable {
            key: key.clone(),
            table_name: to_table_name(&key.canonical_name()),
            declared_by: declared_by.clone(),
        })
        .collect();

    ModelPlan {
        classes,
        join_tables,
        failures: Vec::new(),
    }
}
