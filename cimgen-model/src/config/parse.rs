//! Config parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Config;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "cimgen.toml")
    }
}

impl Config {
    /// Parse a cimgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a cimgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.config_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Validate the config after parsing.
fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let required = config.profiles.required.as_deref().unwrap_or_default();
    let excluded = config.profiles.excluded.as_deref().unwrap_or_default();

    for profile in required.iter().chain(excluded) {
        if profile.trim().is_empty() {
            return Err(ctx.validation_error("profile names must not be empty"));
        }
    }

    if let Some(profile) = required.iter().find(|p| excluded.contains(*p)) {
        let message = format!("profile '{}' is both required and excluded", profile);
        return Err(match ctx.find_quoted(profile) {
            Some(span) => ctx.validation_error_at(message, span),
            None => ctx.validation_error(message),
        });
    }

    if config.generator.model.as_os_str().is_empty() {
        return Err(ctx.validation_error("`generator.model` must name a class map file"));
    }

    Ok(())
}
