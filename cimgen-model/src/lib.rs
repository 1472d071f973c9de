//! Loader-side input for the cimgen CIM code generator.
//!
//! Two documents are read here:
//!
//! - the class map produced by the UML/RDF model loader, as JSON
//!   ([`RawModel`]), where absent keys mean "not applicable";
//! - the generator configuration, `cimgen.toml` ([`Config`]).
//!
//! Both report failures as [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod model;

pub use config::{Config, ConfigFile, GeneratorConfig, ProfileConfig, Target};
pub use error::{Error, Result, SourceContext};
pub use model::{RawAttribute, RawClass, RawInstance, RawModel};
