//! Domain validation module
//!
//! The rule registry, the rule expression parser and the validator that
//! checks request messages against registered rules.

pub mod types;
pub mod expression;
pub mod registry;
pub mod rules;
pub mod request_validator;

pub use types::{Constraint, DuplicatePolicy, FieldRuleSet, FieldViolation, RuleExpression};
pub use registry::{global, install, RuleRegistry};
pub use rules::register_defaults;
pub use request_validator::RequestValidator;
