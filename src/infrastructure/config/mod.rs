//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::infrastructure::adapters::console::{is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub app: AppConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// chrono strftime pattern for the "Sent at" line
    pub timestamp_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "channel-dispatch".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_timestamp_format(&self.output.timestamp_format) {
            return Err(ConfigError::InvalidValue(format!(
                "output.timestamp-format is not a usable strftime pattern: {:?}",
                self.output.timestamp_format
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue("logging.level must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(level) = var("DISPATCH_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = var("DISPATCH_TIMESTAMP_FORMAT") {
            if is_valid_timestamp_format(&format) {
                self.output.timestamp_format = format;
            } else {
                tracing::warn!("Ignoring DISPATCH_TIMESTAMP_FORMAT {:?}: not a usable strftime pattern", format);
            }
        }
    }

    /// Load from `path` when it exists, otherwise from the environment
    pub fn resolve(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::load_env());
        }
        Self::load(path)
    }
}
