//! Logging utilities module
//! 
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, info, warn};

use crate::domain::messages::MessageType;
use crate::shared::error::{AppError, AppResult};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level; `RUST_LOG` takes precedence
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if format == "json" {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log a rule set registration
    pub fn log_registration(message_type: MessageType, field_count: usize, replaced: bool) {
        info!(
            message_type = %message_type,
            field_count = %field_count,
            replaced = %replaced,
            "Registered validation rules"
        );
    }

    /// Log a message that passed validation
    pub fn log_accepted(message_type: MessageType) {
        debug!(message_type = %message_type, "Request passed validation");
    }

    /// Log a message that failed validation
    pub fn log_rejected(message_type: MessageType, error: &AppError) {
        warn!(
            message_type = %message_type,
            violation_count = %error.violations().len(),
            error = %error,
            "Request rejected by validation"
        );
    }
}
