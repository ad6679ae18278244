//! Error handling module
//! 
//! This module provides centralized error handling for the application.

use thiserror::Error;

use crate::domain::messages::MessageType;
use crate::domain::validation::types::FieldViolation;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rule set for {message_type} is empty")]
    EmptyRuleSet { message_type: MessageType },

    #[error("Unknown field {field} on {message_type}")]
    UnknownField { message_type: MessageType, field: String },

    #[error("Invalid rule for {message_type}.{field}: {reason}")]
    InvalidRule {
        message_type: MessageType,
        field: String,
        reason: String,
    },

    #[error("Rules for {message_type} are already registered")]
    DuplicateRegistration { message_type: MessageType },

    #[error("No rules registered for {message_type}")]
    NotRegistered { message_type: MessageType },

    #[error("Rule registry is already initialized")]
    AlreadyInitialized,

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Validation failed for {message_type}: {}", summarize(.violations))]
    Validation {
        message_type: MessageType,
        violations: Vec<FieldViolation>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Violations carried by a validation failure, empty for every other error
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            AppError::Validation { violations, .. } => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}
