//! Shared utilities and common functionality
//! 
//! This module contains the error type and logging helpers used across the crate.

pub mod error;
pub mod logging;

pub use error::{AppError, AppResult};
pub use logging::LoggingUtils;
