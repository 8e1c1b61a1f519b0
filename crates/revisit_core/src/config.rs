//! Pass configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::{ComponentKind, DispatchError, OperationKind};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Configuration for a driver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassConfig {
    /// Element sequence, in visit order.
    #[serde(default = "default_elements")]
    pub elements: Vec<ComponentKind>,

    /// Operations to run, one pass each.
    #[serde(default = "default_operations")]
    pub operations: Vec<OperationKind>,

    /// Whether passes run on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

fn default_elements() -> Vec<ComponentKind> {
    vec![ComponentKind::A, ComponentKind::B]
}

fn default_operations() -> Vec<OperationKind> {
    vec![OperationKind::V1, OperationKind::V2]
}

impl PassConfig {
    /// File names searched by [`PassConfig::discover`], in priority order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".revisit.json"];

    /// Creates the default configuration: `[A, B]` through `V1` then `V2`.
    pub fn new() -> Self {
        Self {
            elements: default_elements(),
            operations: default_operations(),
            parallel: false,
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DispatchError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DispatchError::config(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parses configuration from JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, DispatchError> {
        // Parse into Value first for validation
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| DispatchError::config(format!("Invalid JSON: {}", e)))?;

        let schema = CONFIG_SCHEMA
            .get_or_init(|| {
                let schema_json: serde_json::Value =
                    serde_json::from_str(SCHEMA_JSON).map_err(|e| e.to_string())?;
                Validator::new(&schema_json).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| DispatchError::config(format!("Invalid embedded schema: {}", e)))?;

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(DispatchError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| DispatchError::config(format!("Invalid config: {}", e)))
    }

    /// Searches `dir` for a configuration file.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Serializes the configuration for writing to disk.
    pub fn to_json_pretty(&self) -> Result<String, DispatchError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DispatchError::config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for PassConfig {
    fn default() -> Self {
        Self::new()
    }
}
