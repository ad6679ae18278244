use std::sync::Arc;

use serde_json::Value;

use crate::domain::messages::{
    AddDeviceRequest, CreateCallRequest, FieldValue, MessageType, RpcMessage, UpdateCallRequest,
};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use super::registry::{self, RuleRegistry};
use super::types::{Constraint, FieldViolation};

/// Validates request messages against a rule registry
#[derive(Debug, Clone)]
pub struct RequestValidator {
    registry: Arc<RuleRegistry>,
}

impl RequestValidator {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// Validator backed by the installed process-wide registry
    pub fn from_global() -> AppResult<Self> {
        registry::global()
            .map(Self::new)
            .ok_or_else(|| AppError::Internal("Rule registry is not initialized".to_string()))
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Collect the violations of a message; empty when it is valid.
    ///
    /// Each field reports its first failing constraint.
    pub fn check<T: RpcMessage>(&self, message: &T) -> AppResult<Vec<FieldViolation>> {
        let message_type = T::MESSAGE_TYPE;
        let rules = self
            .registry
            .rules_for(message_type)
            .ok_or(AppError::NotRegistered { message_type })?;

        let mut violations = Vec::new();
        for (field, rule) in rules.iter() {
            let value = message.field(field).ok_or_else(|| AppError::UnknownField {
                message_type,
                field: field.to_string(),
            })?;

            if let Some(violation) = rule
                .constraints()
                .iter()
                .find_map(|constraint| apply_constraint(field, value, constraint))
            {
                violations.push(violation);
            }
        }

        Ok(violations)
    }

    /// Validate a message, failing with every violated field
    pub fn validate<T: RpcMessage>(&self, message: &T) -> AppResult<()> {
        let violations = self.check(message)?;
        if violations.is_empty() {
            LoggingUtils::log_accepted(T::MESSAGE_TYPE);
            return Ok(());
        }

        let error = AppError::Validation {
            message_type: T::MESSAGE_TYPE,
            violations,
        };
        LoggingUtils::log_rejected(T::MESSAGE_TYPE, &error);
        Err(error)
    }

    /// Decode a JSON payload as the given message type and validate it
    pub fn validate_json(&self, message_type: MessageType, payload: &Value) -> AppResult<()> {
        match message_type {
            MessageType::CreateCall => self.validate(&decode::<CreateCallRequest>(payload)?),
            MessageType::UpdateCall => self.validate(&decode::<UpdateCallRequest>(payload)?),
            MessageType::AddDevice => self.validate(&decode::<AddDeviceRequest>(payload)?),
        }
    }
}

fn decode<T: RpcMessage>(payload: &Value) -> AppResult<T> {
    Ok(T::deserialize(payload)?)
}

/// Apply one constraint to a field value
fn apply_constraint(field: &str, value: FieldValue<'_>, constraint: &Constraint) -> Option<FieldViolation> {
    let unit = match value {
        FieldValue::Text(_) => "characters",
        FieldValue::List(_) => "items",
    };
    let size = value.size();

    let message = match constraint {
        Constraint::Required => {
            if !value.is_empty() {
                return None;
            }
            "is required".to_string()
        }
        Constraint::Min(min) => {
            if size >= *min {
                return None;
            }
            format!("must have at least {} {}", min, unit)
        }
        Constraint::Max(max) => {
            if size <= *max {
                return None;
            }
            format!("must have at most {} {}", max, unit)
        }
        Constraint::Len(len) => {
            if size == *len {
                return None;
            }
            format!("must have exactly {} {}", len, unit)
        }
        Constraint::OneOf(allowed) => {
            let rejected = match value {
                FieldValue::Text(s) => (!allowed.iter().any(|a| a == s)).then_some(s),
                FieldValue::List(items) => items
                    .iter()
                    .map(String::as_str)
                    .find(|item| !allowed.iter().any(|a| a == item)),
            }?;
            format!("'{}' must be one of: {}", rejected, allowed.join(", "))
        }
    };

    Some(FieldViolation {
        field: field.to_string(),
        constraint: constraint.tag(),
        message,
    })
}
