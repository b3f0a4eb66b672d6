use crate::models::ScriptVariables;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use std::fs;
use thiserror::Error;

/// YAML key that must carry the list of directory-match patterns.
pub const REQUIRED_DIRECTORIES_KEY: &str = "CODING_STANDARDS_DIRECTORIES";

/// Errors from loading the script variables file.
///
/// Every variant is fatal: configuration problems abort the run with exit
/// code 1 before any diff is computed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment file '{0}' could not be found")]
    MissingFile(Utf8PathBuf),

    #[error("Failed to read environment file '{path}'")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse environment file '{path}'")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Environment file '{path}' must contain YAML mapping documents")]
    NotAMapping { path: Utf8PathBuf },

    #[error("Required key '{key}' was not present in '{path}'")]
    MissingKey { key: String, path: Utf8PathBuf },
}

/// Loader for the CI script variables file.
///
/// The file may hold several YAML documents (historical format); documents
/// are merged in order with later keys winning, then deserialized into
/// [`ScriptVariables`]. The required directories key is validated here so the
/// pipeline never sees an unconfigured run.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    variables_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager for the given variables file path.
    pub fn new<P: AsRef<Utf8Path>>(variables_path: P) -> Self {
        Self {
            variables_path: variables_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate the script variables file.
    pub fn load_script_variables(&self) -> Result<ScriptVariables, ConfigError> {
        if !self.variables_path.exists() {
            return Err(ConfigError::MissingFile(self.variables_path.clone()));
        }

        let contents = fs::read_to_string(&self.variables_path).map_err(|source| ConfigError::Io {
            path: self.variables_path.clone(),
            source,
        })?;

        let merged = self.merge_documents(&contents)?;

        let variables: ScriptVariables =
            serde_yaml_ng::from_value(Value::Mapping(merged)).map_err(|source| {
                ConfigError::Parse {
                    path: self.variables_path.clone(),
                    source,
                }
            })?;

        if variables.coding_standards_directories.is_none() {
            return Err(ConfigError::MissingKey {
                key: REQUIRED_DIRECTORIES_KEY.to_string(),
                path: self.variables_path.clone(),
            });
        }

        tracing::info!("Loaded script variables from {}", self.variables_path);
        Ok(variables)
    }

    /// Merge all YAML documents in the file into a single mapping.
    ///
    /// Empty documents are ignored; later documents override earlier keys.
    fn merge_documents(&self, contents: &str) -> Result<Mapping, ConfigError> {
        let mut merged = Mapping::new();

        for document in serde_yaml_ng::Deserializer::from_str(contents) {
            let value = Value::deserialize(document).map_err(|source| ConfigError::Parse {
                path: self.variables_path.clone(),
                source,
            })?;

            match value {
                Value::Null => continue,
                Value::Mapping(mapping) => {
                    for (key, entry) in mapping {
                        merged.insert(key, entry);
                    }
                }
                _ => {
                    return Err(ConfigError::NotAMapping {
                        path: self.variables_path.clone(),
                    });
                }
            }
        }

        Ok(merged)
    }

    /// Get the variables file path.
    pub fn variables_path(&self) -> &Utf8Path {
        &self.variables_path
    }
}
