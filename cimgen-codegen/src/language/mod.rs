//! Backend abstractions.
//!
//! This module provides the trait and output types backends implement:
//! - [`Backend`] - Main trait for target backends
//! - [`ClassOutput`] - Rendered strings for one class
//! - [`AttributeOutput`] - Rendered strings for one attribute
//! - [`RenderedModel`] - Everything rendered in one run

mod traits;

pub use traits::{AttributeOutput, Backend, ClassOutput, RenderedModel, wrap_type};
