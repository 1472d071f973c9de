//! Type and relationship mapping engine for the cimgen CIM code generator.
//!
//! This crate turns typed class descriptors into per-target field plans
//! that backends (e.g., `cimgen-codegen-python`) render into strings.
//!
//! # Module Organization
//!
//! - [`mapping`] - The engine: primitive mapping, multiplicity parsing,
//!   attribute classification, cardinality resolution, the association
//!   registry and the emission decision table
//! - [`plan`] - Per-class plans produced by one planning pass
//! - [`target`] - Target configuration the engine is parameterized by
//! - [`naming`] - Field naming conventions per target
//! - [`language`] - Backend trait and rendered output types
//! - [`pipeline`] - Validate → lower → plan orchestration with diagnostics

pub mod language;
pub mod mapping;
pub mod naming;
pub mod pipeline;
pub mod plan;
pub mod target;

pub use language::{AttributeOutput, Backend, ClassOutput, RenderedModel, wrap_type};
pub use plan::{
    ClassFailure, ClassFlags, ClassPlan, JoinTable, ModelPlan, PlannedField, plan_model,
};
pub use target::TargetConfig;
