//! Crate-level test suite
//!
//! - Unit tests that exercise the registry, validator and configuration together
//! - Request fixtures shared by those tests

pub mod fixtures;
pub mod unit;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        config
    }
}
