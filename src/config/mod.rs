// Configuration module entry point
// Loads logging configuration for applications built on the response helpers

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Access log file path (stdout when unset)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr when unset)
    #[serde(default)]
    pub error_log_file: Option<String>,
    /// Response log format: `common` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "common".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log_file: None,
            error_log_file: None,
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file falls back to defaults; `RESPOND_*` environment
    /// variables override file values.
    pub fn load_from(config_path: &str) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .set_default("format", default_format())?
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(::config::Environment::with_prefix("RESPOND"))
            .build()?;

        settings.try_deserialize()
    }
}
