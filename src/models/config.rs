use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Script variables from `.circleci/script_variables.yml`.
///
/// The file is a sequence of YAML mapping documents merged in order by
/// [`ConfigManager`](crate::config::ConfigManager). Only the directory list is
/// interpreted; any other keys are carried along untouched so unrelated CI
/// variables in the same file do not break parsing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScriptVariables {
    #[serde(rename = "CODING_STANDARDS_DIRECTORIES", default)]
    pub coding_standards_directories: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml_ng::Value>,
}

impl ScriptVariables {
    /// Directory-match regex patterns, empty if the key was absent.
    ///
    /// The config loader rejects a file without the key, so downstream code
    /// only ever sees a validated, non-empty-by-policy list.
    pub fn directory_patterns(&self) -> &[String] {
        self.coding_standards_directories.as_deref().unwrap_or(&[])
    }
}
