//! Snapshot tests for the Python backends.
//!
//! Each test runs the validate → lower → plan pipeline with a backend's
//! own configuration and renders the plan.

use cimgen_codegen::{Backend, ClassOutput, RenderedModel, pipeline::Pipeline};
use cimgen_codegen_python::{DataclassBackend, PydanticBackend, SqlalchemyBackend};
use cimgen_model::RawModel;

const GRID: &str = r##"{
    "classes": [
        {"name": "IdentifiedObject", "origin": ["EQ"], "attributes": [
            {"label": "mRID", "dataType": "#String", "multiplicity": "M:1", "origin": ["EQ"]},
            {"label": "name", "dataType": "#String", "multiplicity": "M:0..1", "origin": ["EQ"]}
        ]},
        {"name": "EquipmentContainer", "superClass": "#IdentifiedObject", "origin": ["EQ"]},
        {"name": "Substation", "superClass": "#EquipmentContainer", "origin": ["EQ"], "attributes": [
            {"label": "Bays", "range": "#Bay", "multiplicity": "M:0..n",
             "inverseRole": "Bay.Substation", "inverseMultiplicity": "M:1", "origin": ["EQ"]}
        ]},
        {"name": "Bay", "superClass": "#EquipmentContainer", "origin": ["EQ"], "attributes": [
            {"label": "Substation", "range": "#Substation", "multiplicity": "M:1",
             "inverseRole": "Substation.Bays", "inverseMultiplicity": "M:0..n", "origin": ["EQ"]}
        ]},
        {"name": "Terminal", "superClass": "#IdentifiedObject", "origin": ["EQ"], "attributes": [
            {"label": "ConnectivityNodes", "range": "#ConnectivityNode", "multiplicity": "M:0..n",
             "inverseRole": "ConnectivityNode.Terminals", "inverseMultiplicity": "M:0..n", "origin": ["EQ"]},
            {"label": "phases", "range": "#PhaseCode", "multiplicity": "M:0..1", "origin": ["EQ"]},
            {"label": "sequenceNumber", "dataType": "#Integer", "multiplicity": "M:0..1", "origin": ["EQ"]}
        ]},
        {"name": "ConnectivityNode", "superClass": "#IdentifiedObject", "origin": ["EQ"], "attributes": [
            {"label": "Terminals", "range": "#Terminal", "multiplicity": "M:0..n",
             "inverseRole": "Terminal.ConnectivityNodes", "inverseMultiplicity": "M:0..n", "origin": ["EQ"]}
        ]},
        {"name": "PhaseCode", "stereotype": "enumeration", "origin": ["EQ"], "instances": [
            {"label": "ABC", "comment": "Phases A, B and C"}, {"label": "N"}
        ]},
        {"name": "Date", "stereotype": "Primitive"},
        {"name": "Decimal", "stereotype": "Primitive"}
    ]
}"##;

/// Run the pipeline with the backend's configuration and render the plan.
fn render(backend: &dyn Backend) -> RenderedModel {
    let raw: RawModel = serde_json::from_str(GRID).expect("Failed to parse test class map");
    let mut ctx = Pipeline::new()
        .run(raw, backend.config())
        .expect("pipeline should succeed");
    let plan = ctx.take_plan().expect("plan");
    let model = ctx.take_model().expect("model");
    backend.render(&plan, &model)
}

/// Class body as it would appear in a module, one line per entry.
fn body(class: &ClassOutput) -> String {
    class
        .header
        .iter()
        .cloned()
        .chain(class.attributes.iter().map(|a| a.declaration.clone()))
        .chain(class.literals.iter().cloned())
        .collect::<Vec<_>>()
        .join("\n")
}

fn class<'a>(rendered: &'a RenderedModel, name: &str) -> &'a ClassOutput {
    rendered
        .class(name)
        .unwrap_or_else(|| panic!("{} not rendered", name))
}

#[test]
fn test_sqlalchemy_emitted_classes() {
    let rendered = render(&SqlalchemyBackend);

    let names: Vec<&str> = rendered.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "IdentifiedObject",
            "EquipmentContainer",
            "Substation",
            "Bay",
            "Terminal",
            "ConnectivityNode"
        ]
    );
    assert_eq!(rendered.join_tables.len(), 1);
}

#[test]
fn test_sqlalchemy_root_class() {
    let rendered = render(&SqlalchemyBackend);

    insta::assert_snapshot!(body(class(&rendered, "IdentifiedObject")), @r#"
    __tablename__ = "identified_object"
    __mapper_args__ = {"polymorphic_identity": "identified_object", "polymorphic_on": "objectType"}
    mRID: Mapped[str] = mapped_column(String(255), primary_key=True)
    objectType: Mapped[str] = mapped_column(String(255))
    name: Mapped[Optional[str]] = mapped_column(String(255))
    "#);
}

#[test]
fn test_sqlalchemy_key_holder() {
    let rendered = render(&SqlalchemyBackend);

    insta::assert_snapshot!(body(class(&rendered, "Bay")), @r#"
    __tablename__ = "bay"
    __mapper_args__ = {"polymorphic_identity": "bay", "polymorphic_on": "objectType"}
    mRID: Mapped[str] = mapped_column(String(255),ForeignKey(column="equipment_container.mRID", name="fk_bay_equipment_container"),primary_key=True)
    substation_id: Mapped[str] = mapped_column(ForeignKey(column="substation.mRID",name="fk_substation_bay_substation",use_alter=True))
        substation: Mapped[Substation]  =  relationship(back_populates="bays", foreign_keys=[substation_id])
    "#);
}

#[test]
fn test_sqlalchemy_collection_end() {
    let rendered = render(&SqlalchemyBackend);
    let substation = class(&rendered, "Substation");

    let bays = substation.attribute("bays").expect("bays");
    assert_eq!(bays.foreign_key, None);
    insta::assert_snapshot!(
        bays.declaration,
        @r#"bays: Mapped[Optional[List[Bay]]]  =  relationship(primaryjoin="Substation.mRID==Bay.substation_id",back_populates="substation", post_update=True)"#
    );
}

#[test]
fn test_sqlalchemy_many_to_many() {
    let rendered = render(&SqlalchemyBackend);
    let terminal = class(&rendered, "Terminal");

    insta::assert_snapshot!(
        terminal.attribute("connectivityNodes").expect("field").declaration,
        @r#"connectivityNodes: Mapped[Optional[List[ConnectivityNode]]]  =  relationship(secondary=terminal_to_connectivity_node, back_populates="terminals")"#
    );
    insta::assert_snapshot!(
        terminal.attribute("phases").expect("field").declaration,
        @"phases: Mapped[Optional[str]] = mapped_column(String(255))"
    );
    insta::assert_snapshot!(
        terminal.attribute("sequenceNumber").expect("field").declaration,
        @"sequenceNumber: Mapped[Optional[int]] = mapped_column(Integer)"
    );
}

#[test]
fn test_pydantic_model() {
    let rendered = render(&PydanticBackend);
    let terminal = class(&rendered, "Terminal");

    assert_eq!(
        terminal.imports,
        vec![
            "from .ConnectivityNode import ConnectivityNode",
            "from .PhaseCode import PhaseCode"
        ]
    );
    insta::assert_snapshot!(body(terminal), @r"
    ConnectivityNodes: Optional[List[ConnectivityNode]] = None
    phases: Optional[PhaseCode]
    sequenceNumber: Optional[int]
    ");

    let validators: Vec<&str> = terminal
        .attributes
        .iter()
        .filter_map(|a| a.validator.as_deref())
        .collect();
    assert_eq!(
        validators,
        vec![
            r#"val_ConnectivityNodes_wrap = field_validator("ConnectivityNodes", mode="wrap")(cyclic_references_validator)"#
        ]
    );
}

#[test]
fn test_pydantic_identity_and_enum() {
    let rendered = render(&PydanticBackend);

    insta::assert_snapshot!(body(class(&rendered, "IdentifiedObject")), @r"
    mRID: uuid.UUID
    name: Optional[str]
    ");
    insta::assert_snapshot!(body(class(&rendered, "PhaseCode")), @r#"
    ABC = "ABC" #Phases A, B and C
    N = "N"
    "#);

    assert!(rendered.class("Date").is_none());
    insta::assert_snapshot!(body(class(&rendered, "Decimal")), @"data_type = float");
}

#[test]
fn test_dataclass_fields() {
    let rendered = render(&DataclassBackend);
    let terminal = class(&rendered, "Terminal");

    assert_eq!(terminal.imports, vec!["from .PhaseCode import PhaseCode"]);
    insta::assert_snapshot!(body(terminal), @r"
    ConnectivityNodes: list = field(default_factory=list)
    phases: Optional[PhaseCode] = field(default=None)
    sequenceNumber: int = field(default=0)
    ");
    insta::assert_snapshot!(
        body(class(&rendered, "Bay")),
        @"Substation: Optional[str] = field(default=None)"
    );
    insta::assert_snapshot!(body(class(&rendered, "IdentifiedObject")), @r#"
    mRID: str = field(default="")
    name: str = field(default="")
    "#);
}

#[test]
fn test_dataclass_primitive_classes() {
    let rendered = render(&DataclassBackend);

    insta::assert_snapshot!(body(class(&rendered, "Date")), @"data_type = date");
    insta::assert_snapshot!(body(class(&rendered, "Decimal")), @"data_type = float");
}
