//! Generator configuration (`cimgen.toml`).

mod file;
mod parse;
mod target;

use std::path::PathBuf;

pub use file::ConfigFile;
use serde::Deserialize;
pub use target::Target;

/// Root configuration for cimgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target and model location
    pub generator: GeneratorConfig,

    /// Overrides of the target's default profile filters
    #[serde(default)]
    pub profiles: ProfileConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Target representation to plan for
    pub target: Target,
    /// Path to the loader's class map, relative to the config file
    pub model: PathBuf,
}

/// The `[profiles]` table.
///
/// An absent key keeps the target's default; an empty list clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub required: Option<Vec<String>>,
    pub excluded: Option<Vec<String>>,
}
