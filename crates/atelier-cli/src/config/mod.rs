//! Configuration with multi-source loading.
//!
//! Merge order, lowest to highest priority: built-in defaults,
//! `atelier.config.json`, `ATELIER_*` environment variables, CLI arguments.

mod loading;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file name searched in the working directory.
pub const CONFIG_FILE: &str = "atelier.config.json";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "ATELIER_";

/// Atelier configuration - loaded from atelier.config.json, environment,
/// and CLI arguments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AtelierConfig {
    /// Output directory for bundled files
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Template identifier: built-in short name or a path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Production build (minify, content hashing, no source maps)
    #[serde(default)]
    pub optimized: bool,

    /// Rebuild on source changes while serving
    #[serde(default)]
    pub watch: bool,

    /// Port for the serve operation
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host for the serve operation
    #[serde(default = "default_host")]
    pub host: String,

    /// Terminate TLS when serving
    #[serde(default)]
    pub ssl: bool,

    /// PEM certificate path for TLS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<PathBuf>,

    /// PEM private key path for TLS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<PathBuf>,

    /// Override for the built-in templates root directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_root: Option<PathBuf>,
}

pub(crate) fn default_output() -> PathBuf {
    PathBuf::from(crate::bundle::DEFAULT_OUT_DIR)
}

pub(crate) fn default_port() -> u16 {
    3000
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl AtelierConfig {
    /// Generate the JSON Schema for atelier.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(AtelierConfig);
        serde_json::to_value(schema).expect("schema serialization should never fail")
    }
}
