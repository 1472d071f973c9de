//! End-to-end scenarios for the mapping engine.
//!
//! Each test runs the full validate → lower → plan pipeline on a small
//! class map and checks the resulting plan.

use cimgen_codegen::{
    ModelPlan, TargetConfig,
    mapping::{Cardinality, EmissionRules, EmitKind, FieldKind, OneToOneSide, SkipReason},
    naming::{PYTHON_LOWER_NAMING, PYTHON_NAMING},
    pipeline::Pipeline,
};
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
            {"label": "ABC"}, {"label": "N"}
        ]},
        {"name": "Voltage", "stereotype": "CIMDatatype", "origin": ["EQ"], "attributes": [
            {"label": "value", "dataType": "#Float", "multiplicity": "M:0..1"},
            {"label": "unit", "range": "#UnitSymbol", "multiplicity": "M:0..1"}
        ]},
        {"name": "Measurement", "superClass": "#IdentifiedObject", "origin": ["EQ"], "attributes": [
            {"label": "unit", "range": "#UnitSymbol", "multiplicity": "M:1", "origin": ["EQ"]}
        ]},
        {"name": "UnitSymbol", "stereotype": "enumeration", "instances": [{"label": "V"}]},
        {"name": "StateVariablesVersion", "origin": ["SV"]}
    ]
}"##;

fn raw_grid() -> RawModel {
    serde_json::from_str(GRID).expect("Failed to parse test class map")
}

fn orm_target() -> TargetConfig {
    TargetConfig::new("orm", PYTHON_LOWER_NAMING)
        .with_plural_role_heuristic()
        .with_rules(EmissionRules {
            builtin_names: &["Float", "Integer", "String", "Boolean"],
            skip_cim_datatypes: true,
            skip_version_classes: true,
            skip_unit_classes: true,
            skip_enumerations: true,
            skip_primitives: true,
            required_profiles: vec!["EQ".into(), "GL".into()],
            excluded_profiles: Vec::new(),
        })
}

fn plan(target: TargetConfig) -> ModelPlan {
    let mut ctx = Pipeline::new()
        .run(raw_grid(), target)
        .expect("pipeline should succeed");
    ctx.take_plan().expect("plan")
}

#[test]
fn test_substation_bay_has_single_key_owner() {
    let plan = plan(orm_target());

    let bay = plan.class("Bay").and_then(|c| c.field("Substation")).expect("Bay.Substation");
    assert_eq!(bay.cardinality, Cardinality::OneToMany);
    assert_eq!(bay.field.kind, FieldKind::Reference);
    assert_eq!(bay.field.emitted_name, "substation");

    let bays = plan.class("Substation").and_then(|c| c.field("Bays")).expect("Substation.Bays");
    assert_eq!(bays.cardinality, Cardinality::ManyToOne);
    assert_eq!(bays.field.kind, FieldKind::Collection);

    let key_holders = plan
        .classes
        .iter()
        .flat_map(|c| &c.fields)
        .filter(|f| {
            matches!(
                f.cardinality,
                Cardinality::OneToMany | Cardinality::OneToOne(OneToOneSide::Owned)
            )
        })
        .count();
    assert_eq!(key_holders, 1);
}

#[test]
fn test_many_to_many_single_join_table() {
    let plan = plan(orm_target());

    assert_eq!(plan.join_tables.len(), 1);
    let table = &plan.join_tables[0];
    assert_eq!(table.table_name, "terminal_to_connectivity_node");

    for (class, label) in [("Terminal", "ConnectivityNodes"), ("ConnectivityNode", "Terminals")] {
        let field = plan.class(class).and_then(|c| c.field(label)).expect("field");
        assert_eq!(field.cardinality, Cardinality::ManyToMany);
        assert_eq!(field.join_table.as_ref(), Some(&table.key));
    }
    assert!(plan.class("Terminal").expect("terminal").flags.needs_many_to_many);
}

#[test]
fn test_emission_decisions() {
    let plan = plan(orm_target());
    let emit = |name: &str| plan.class(name).map(|c| c.emit);

    assert_eq!(emit("Measurement"), Some(EmitKind::Skip(SkipReason::UnitValue)));
    assert_eq!(emit("Voltage"), Some(EmitKind::Skip(SkipReason::CimDatatype)));
    assert_eq!(emit("PhaseCode"), Some(EmitKind::Skip(SkipReason::Enumeration)));
    assert_eq!(
        emit("StateVariablesVersion"),
        Some(EmitKind::Skip(SkipReason::VersionMetadata))
    );
    assert_eq!(emit("Substation"), Some(EmitKind::ObjectSchema));
}

#[test]
fn test_enum_and_identity_fields() {
    let plan = plan(orm_target());

    let root = plan.class("IdentifiedObject").expect("root");
    assert_eq!(root.field("mRID").map(|f| f.field.kind), Some(FieldKind::Primitive));
    assert!(root.flags.needs_polymorphic_discriminator);

    let terminal = plan.class("Terminal").expect("terminal");
    let phases = terminal.field("phases").expect("phases");
    assert_eq!(phases.field.kind, FieldKind::Enum);
    assert_eq!(phases.cardinality, Cardinality::Unclassified);
}

#[test]
fn test_planning_is_idempotent() {
    let first = serde_json::to_value(plan(orm_target())).expect("serialize");
    let second = serde_json::to_value(plan(orm_target())).expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn test_unfiltered_target_keeps_everything() {
    let plan = plan(TargetConfig::new("plain", PYTHON_NAMING));

    assert!(plan.skipped().next().is_none());
    assert_eq!(plan.class("PhaseCode").map(|c| c.emit), Some(EmitKind::Enum));
    assert_eq!(
        plan.class("Measurement").map(|c| c.emit),
        Some(EmitKind::ObjectSchema)
    );
}

#[test]
fn test_duplicate_class_aborts() {
    let raw: RawModel =
        serde_json::from_str(r#"{"classes": [{"name": "Bay"}, {"name": "Bay"}]}"#).expect("parse");

    let err = Pipeline::new()
        .run(raw, TargetConfig::new("plain", PYTHON_NAMING))
        .unwrap_err();

    assert!(err.to_string().contains("duplicate class 'Bay'"));
}

#[test]
fn test_bad_class_does_not_stop_the_run() {
    let raw: RawModel = serde_json::from_str(
        r#"{"classes": [
            {"name": "SwitchState", "instances": ["not json"]},
            {"name": "Switch"}
        ]}"#,
    )
    .expect("parse");

    let mut ctx = Pipeline::new()
        .run(raw, TargetConfig::new("plain", PYTHON_NAMING))
        .expect("pipeline should succeed");
    let plan = ctx.take_plan().expect("plan");

    assert!(plan.class("Switch").is_some());
    assert!(plan.class("SwitchState").is_none());
    assert_eq!(plan.failures.len(), 1);
    assert_eq!(plan.failures[0].location, "SwitchState.instances");
    assert!(ctx.has_errors());
}

#[test]
fn test_plural_m1_end_against_collection_plans_a_key() {
    let raw: RawModel = serde_json::from_str(
        r##"{"classes": [
            {"name": "Area", "origin": ["EQ"], "attributes": [
                {"label": "Status", "range": "#Flag", "multiplicity": "M:1",
                 "inverseRole": "Flag.Areas", "inverseMultiplicity": "M:0..n", "origin": ["EQ"]}
            ]},
            {"name": "Flag", "origin": ["EQ"], "attributes": [
                {"label": "Areas", "range": "#Area", "multiplicity": "M:0..n",
                 "inverseRole": "Area.Status", "inverseMultiplicity": "M:1", "origin": ["EQ"]}
            ]}
        ]}"##,
    )
    .expect("parse");

    let mut ctx = Pipeline::new()
        .run(raw, orm_target())
        .expect("pipeline should succeed");
    let plan = ctx.take_plan().expect("plan");

    let status = plan.class("Area").and_then(|c| c.field("Status")).expect("Area.Status");
    assert_eq!(status.cardinality, Cardinality::OneToMany);
    assert_eq!(status.join_table, None);

    let areas = plan.class("Flag").and_then(|c| c.field("Areas")).expect("Flag.Areas");
    assert_eq!(areas.cardinality, Cardinality::ManyToOne);
    assert!(plan.join_tables.is_empty());
}
