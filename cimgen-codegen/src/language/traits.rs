//! Target-agnostic rendering traits.

use cimgen_core::ScalarTypeMapper;
use cimgen_ir::{ClassMap, EnumInstance};
use serde::Serialize;

use crate::{
    mapping::{EmitKind, Multiplicity, Upper},
    plan::{ClassFlags, ClassPlan, JoinTable, ModelPlan},
    target::TargetConfig,
};

/// Trait for target backends.
///
/// Implement this trait to add a new output target. The engine produces
/// the plan; a backend only turns it into strings.
pub trait Backend {
    /// Target identifier (e.g., "sqlalchemy", "go")
    fn name(&self) -> &'static str;

    /// The engine configuration for this target
    fn config(&self) -> TargetConfig;

    /// Render one planned class
    fn render_class(&self, class: &ClassPlan, model: &ClassMap) -> ClassOutput;

    /// Render a join table declaration.
    ///
    /// Default implementation returns `None` (no association tables).
    fn render_join_table(&self, _table: &JoinTable) -> Option<String> {
        None
    }

    /// Render every emitted class and join table of a plan.
    fn render(&self, plan: &ModelPlan, model: &ClassMap) -> RenderedModel {
        RenderedModel {
            classes: plan
                .emitted()
                .map(|class| self.render_class(class, model))
                .collect(),
            join_tables: plan
                .join_tables
                .iter()
                .filter_map(|table| self.render_join_table(table))
                .collect(),
        }
    }
}

/// Rendered strings for one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeOutput {
    pub field_name: String,
    /// The wrapped type (e.g., `Optional[List[Terminal]]`, `*string`).
    pub type_expr: String,
    pub default_expr: Option<String>,
    /// Annotation or tag (e.g., `mapped_column(Float)`, a Go struct tag).
    pub annotation: Option<String>,
    pub relationship: Option<String>,
    pub foreign_key: Option<String>,
    pub validator: Option<String>,
    /// The full declaration line(s) as they appear in the class body.
    pub declaration: String,
}

/// Rendered strings for one class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassOutput {
    pub name: String,
    pub emit: EmitKind,
    pub flags: ClassFlags,
    /// Class-level lines (table name, mapper arguments, identity column).
    pub header: Vec<String>,
    pub imports: Vec<String>,
    pub attributes: Vec<AttributeOutput>,
    /// Enumeration literal lines.
    pub literals: Vec<String>,
}

impl ClassOutput {
    pub fn new(class: &ClassPlan) -> Self {
        Self {
            name: class.name.clone(),
            emit: class.emit,
            flags: class.flags,
            header: Vec::new(),
            imports: Vec::new(),
            attributes: Vec::new(),
            literals: Vec::new(),
        }
    }

    pub fn attribute(&self, field_name: &str) -> Option<&AttributeOutput> {
        self.attributes.iter().find(|a| a.field_name == field_name)
    }

    /// Add one literal line per enumeration instance.
    pub fn with_literals(
        mut self,
        instances: &[EnumInstance],
        render: impl Fn(&EnumInstance) -> String,
    ) -> Self {
        self.literals = instances.iter().map(render).collect();
        self
    }
}

/// Everything rendered in one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderedModel {
    pub classes: Vec<ClassOutput>,
    pub join_tables: Vec<String>,
}

impl RenderedModel {
    pub fn class(&self, name: &str) -> Option<&ClassOutput> {
        self.classes.iter().find(|c| c.name == name)
    }
}

/// Wrap `inner` for a multiplicity: (1,1) bare, (0,1) optional, (1,n)
/// list, (0,n) optional list.
pub fn wrap_type(mapper: &dyn ScalarTypeMapper, inner: &str, multiplicity: Multiplicity) -> String {
    match (multiplicity.min, multiplicity.max) {
        (0, Upper::One) => mapper.map_optional(inner),
        (0, Upper::Many) => mapper.map_optional_list(inner),
        (_, Upper::Many) => mapper.map_list(inner),
        (_, Upper::One) => inner.to_string(),
    }
}
