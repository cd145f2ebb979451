//! Configuration management

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable prefix; nested keys use `__`
/// (`RESPONSE_VALIDATOR_VALIDATION__CONTENT_PREVIEW_CHARS=80`)
pub const ENV_PREFIX: &str = "RESPONSE_VALIDATOR_";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Validation behaviour
    pub validation: ValidationSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (overridden by `RUST_LOG`)
    pub level: String,
    /// Output format: `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Knobs that shape findings and their reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Characters of content quoted in content warnings
    pub content_preview_chars: usize,
    /// Log an info line for passing outcomes
    pub log_passing: bool,
    /// Log warnings
    pub log_warnings: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            content_preview_chars: 200,
            log_passing: true,
            log_warnings: true,
        }
    }
}

impl Config {
    /// Load configuration from an optional YAML file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            figment = figment.merge(Yaml::file(p));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        if config.validation.content_preview_chars == 0 {
            return Err(Error::Config(
                "validation.content_preview_chars must be greater than 0".to_string(),
            ));
        }

        Ok(config)
    }
}
