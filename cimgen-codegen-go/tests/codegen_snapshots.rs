//! Snapshot tests for the Go backend.

use cimgen_codegen::{Backend, ClassOutput, RenderedModel, pipeline::Pipeline};
use cimgen_codegen_go::GoBackend;
use cimgen_model::RawModel;

const GRID: &str = r##"{
    "classes": [
        {"name": "IdentifiedObject", "attributes": [
            {"label": "mRID", "dataType": "#String", "multiplicity": "M:1"},
            {"label": "name", "dataType": "#String", "multiplicity": "M:0..1"}
        ]},
        {"name": "EquipmentContainer", "superClass": "#IdentifiedObject"},
        {"name": "Substation", "superClass": "#EquipmentContainer", "attributes": [
            {"label": "Bays", "range": "#Bay", "multiplicity": "M:0..n",
             "inverseRole": "Bay.Substation", "inverseMultiplicity": "M:1"}
        ]},
        {"name": "Bay", "superClass": "#EquipmentContainer", "attributes": [
            {"label": "Substation", "range": "#Substation", "multiplicity": "M:1",
             "inverseRole": "Substation.Bays", "inverseMultiplicity": "M:0..n"}
        ]},
        {"name": "Terminal", "superClass": "#IdentifiedObject", "attributes": [
            {"label": "phases", "range": "#PhaseCode", "multiplicity": "M:0..1"},
            {"label": "sequenceNumber", "dataType": "#Integer", "multiplicity": "M:0..1"},
            {"label": "nominalVoltage", "dataType": "#Voltage", "multiplicity": "M:0..1"}
        ]},
        {"name": "PhaseCode", "stereotype": "enumeration", "instances": [
            {"label": "ABC", "comment": "Phases A, B and C"}, {"label": "N"}
        ]},
        {"name": "Voltage", "stereotype": "CIMDatatype", "attributes": [
            {"label": "value", "dataType": "#Float", "multiplicity": "M:0..1"}
        ]},
        {"name": "Integer", "stereotype": "Primitive"}
    ]
}"##;

fn render() -> RenderedModel {
    let backend = GoBackend::new();
    let raw: RawModel = serde_json::from_str(GRID).expect("Failed to parse test class map");
    let mut ctx = Pipeline::new()
        .run(raw, backend.config())
        .expect("pipeline should succeed");
    let plan = ctx.take_plan().expect("plan");
    let model = ctx.take_model().expect("model");
    backend.render(&plan, &model)
}

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
fn test_primitives_and_datatypes_are_skipped() {
    let rendered = render();

    assert!(rendered.class("Voltage").is_none());
    assert!(rendered.class("Integer").is_none());
    assert!(rendered.class("PhaseCode").is_some());
    assert!(rendered.join_tables.is_empty());
}

#[test]
fn test_identity_and_optional_fields() {
    let rendered = render();

    insta::assert_snapshot!(body(class(&rendered, "IdentifiedObject")), @r#"
    MRID string `xml:"ID,attr"`
    Name *string `xml:"http://iec.ch/TC57/CIM100# IdentifiedObject.name"`
    "#);
}

#[test]
fn test_reference_suffixes() {
    let rendered = render();

    insta::assert_snapshot!(body(class(&rendered, "Bay")), @r#"
    EquipmentContainer
    SubstationId resource `xml:"http://iec.ch/TC57/CIM100# Bay.Substation"`
    "#);
    insta::assert_snapshot!(body(class(&rendered, "Substation")), @r#"
    EquipmentContainer
    BaysIds []resource `xml:"http://iec.ch/TC57/CIM100# Substation.Bays"`
    "#);
}

#[test]
fn test_enum_and_datatype_fields() {
    let rendered = render();

    insta::assert_snapshot!(body(class(&rendered, "Terminal")), @r#"
    IdentifiedObject
    Phases *PhaseCode `xml:"http://iec.ch/TC57/CIM100# Terminal.phases"`
    SequenceNumber *int64 `xml:"http://iec.ch/TC57/CIM100# Terminal.sequenceNumber"`
    NominalVoltage *float64 `xml:"http://iec.ch/TC57/CIM100# Terminal.nominalVoltage"`
    "#);
    insta::assert_snapshot!(body(class(&rendered, "PhaseCode")), @r#"
    type PhaseCode string
    PhaseCode_ABC PhaseCode = "ABC" //Phases A, B and C
    PhaseCode_N PhaseCode = "N"
    "#);
}
