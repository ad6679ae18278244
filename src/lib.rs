//! Video coordinator RPC - request validation rules
//! 
//! This library registers the field validation rules of the video coordinator
//! request messages and validates incoming requests against them.

pub mod config;
pub mod domain;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use domain::{MessageType, RequestValidator, RuleRegistry};
pub use shared::error::{AppError, AppResult};

/// Build the default rule registry and publish it as the process-wide instance
pub fn initialize(config: &AppConfig) -> AppResult<std::sync::Arc<RuleRegistry>> {
    let registry = RuleRegistry::with_defaults(config.registry.duplicate_policy)?;
    domain::validation::install(registry)
}
