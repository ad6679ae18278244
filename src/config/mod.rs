//! Configuration management module
//! 
//! This module handles loading and validating application settings.

pub mod app_config;

pub use app_config::{AppConfig, LoggingConfig, RegistryConfig};
