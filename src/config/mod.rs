//! Configuration for the validation engine

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Depth cap applied when no configuration is supplied
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Tunables for [`SchemaValidator`](crate::validation::SchemaValidator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum nesting depth a schema may descend while validating
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from the `MAX_INPUT_DEPTH` environment variable
    ///
    /// An unset variable yields the default; an unparsable one is reported
    /// and ignored.
    pub fn from_env() -> Self {
        let max_depth = match std::env::var("MAX_INPUT_DEPTH") {
            Ok(raw) => match raw.parse() {
                Ok(depth) => depth,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparsable MAX_INPUT_DEPTH");
                    DEFAULT_MAX_DEPTH
                }
            },
            Err(_) => DEFAULT_MAX_DEPTH,
        };

        Self { max_depth }
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
