//! Application configuration structures
//! 
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validation::DuplicatePolicy;
use crate::shared::error::{AppError, AppResult};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format: "text" or "json"
    #[validate(length(min = 1))]
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

/// Rule registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Behavior when a message type is registered twice
    pub duplicate_policy: DuplicatePolicy,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,

    /// Rule registry configuration
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> AppResult<Self> {
        Self::load_from("Conf")
    }

    /// Load configuration from the named file (optional) and environment variables
    pub fn load_from(file_name: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(
                config::Environment::with_prefix("VIDEO_RPC")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;

        config.validate_config()?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Config(format!("Configuration validation failed: {}", e)))?;

        if !["text", "json"].contains(&self.logging.format.as_str()) {
            return Err(AppError::Config(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }

        Ok(())
    }
}
