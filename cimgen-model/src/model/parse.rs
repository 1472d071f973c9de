//! Class map parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::RawModel;
use crate::{Error, Result, error::SourceContext};

impl FromStr for RawModel {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "model.json")
    }
}

impl RawModel {
    /// Parse a class map file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_model(&content, &path.display().to_string())
    }

    /// Parse a class map from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_model(content, filename)
    }
}

/// Parse a class map from content with the given filename for error reporting.
pub fn parse_model(content: &str, filename: &str) -> Result<RawModel> {
    let source_ctx = SourceContext::new(content, filename);
    let model: RawModel =
        serde_json::from_str(content).map_err(|e| source_ctx.model_error(e))?;
    validate_model(&model, &source_ctx)?;
    Ok(model)
}

/// Reject names no generated artifact could be named after.
fn validate_model(model: &RawModel, ctx: &SourceContext) -> Result<()> {
    for class in &model.classes {
        if class.name.trim().is_empty() {
            return Err(ctx.validation_error("class name must not be empty"));
        }

        for attr in &class.attributes {
            if attr.label.trim().is_empty() {
                let message = format!("attribute of '{}' has an empty label", class.name);
                return Err(match ctx.find_quoted(&class.name) {
                    Some(span) => ctx.validation_error_at(message, span),
                    None => ctx.validation_error(message),
                });
            }
        }
    }
    Ok(())
}
