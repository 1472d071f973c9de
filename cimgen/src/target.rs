//! Unified target dispatch.
//!
//! Maps a configured [`Target`] to its backend and applies the profile
//! overrides from `cimgen.toml`.

use cimgen_codegen::{Backend, TargetConfig};
use cimgen_codegen_go::GoBackend;
use cimgen_codegen_python::{DataclassBackend, PydanticBackend, SqlalchemyBackend};
use cimgen_model::{Config, Target};

/// Backend and engine configuration for one run.
pub struct TargetSupport {
    pub target: Target,
    backend: Box<dyn Backend>,
    config: TargetConfig,
}

impl TargetSupport {
    /// Resolve the target, preferring `target` over the config file.
    pub fn resolve(config: &Config, target: Option<Target>) -> Self {
        let target = target.unwrap_or(config.generator.target);
        let backend: Box<dyn Backend> = match target {
            Target::Sqlalchemy => Box::new(SqlalchemyBackend),
            Target::Pydantic => Box::new(PydanticBackend),
            Target::Dataclass => Box::new(DataclassBackend),
            Target::Go => Box::new(GoBackend::new()),
        };
        let engine = backend.config().with_profiles(
            config.profiles.required.clone(),
            config.profiles.excluded.clone(),
        );

        Self {
            target,
            backend,
            config: engine,
        }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Engine configuration with the profile overrides applied.
    pub fn config(&self) -> TargetConfig {
        self.config.clone()
    }
}
