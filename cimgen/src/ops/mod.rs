//! Core operations.
//!
//! This module contains the business logic for cimgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod plan;
pub mod render;

pub use check::check;
pub use plan::plan;
pub use render::render;
