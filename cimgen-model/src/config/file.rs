use std::path::{Path, PathBuf};

use super::Config;
use crate::{Error, RawModel, Result};

/// Represents a cimgen.toml file with both raw content and parsed config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a cimgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the class map, resolved against the config file's directory.
    pub fn model_path(&self) -> PathBuf {
        let model = &self.config.generator.model;
        if model.is_absolute() {
            return model.clone();
        }
        match self.path.parent() {
            Some(dir) => dir.join(model),
            None => model.clone(),
        }
    }

    /// Load and parse the class map this config points at.
    pub fn load_model(&self) -> Result<RawModel> {
        RawModel::from_file(self.model_path())
    }
}
