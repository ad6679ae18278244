//! Domain layer - request messages and their validation rules
//! 
//! This module is independent of transport concerns; the RPC layer hands it
//! decoded messages or raw JSON payloads.

pub mod messages;
pub mod validation;

pub use messages::{
    AddDeviceRequest, CreateCallRequest, FieldValue, MessageType, RpcMessage, UpdateCallRequest,
};
pub use validation::{
    Constraint, DuplicatePolicy, FieldRuleSet, FieldViolation, RequestValidator, RuleExpression,
    RuleRegistry,
};
