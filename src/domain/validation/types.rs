use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single constraint token of a rule expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Required,
    Min(usize),
    Max(usize),
    Len(usize),
    OneOf(Vec<String>),
}

impl Constraint {
    /// Token name as written in rule expressions
    pub fn tag(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Min(_) => "min",
            Constraint::Max(_) => "max",
            Constraint::Len(_) => "len",
            Constraint::OneOf(_) => "oneof",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("required"),
            Constraint::Min(n) => write!(f, "min={}", n),
            Constraint::Max(n) => write!(f, "max={}", n),
            Constraint::Len(n) => write!(f, "len={}", n),
            Constraint::OneOf(values) => write!(f, "oneof={}", values.join(",")),
        }
    }
}

/// Parsed rule expression together with its source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleExpression {
    pub(crate) source: String,
    pub(crate) constraints: Vec<Constraint>,
}

impl RuleExpression {
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }
}

/// Rules of one message type, keyed by schema field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldRuleSet {
    pub(crate) rules: BTreeMap<String, RuleExpression>,
}

impl FieldRuleSet {
    pub fn get(&self, field: &str) -> Option<&RuleExpression> {
        self.rules.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleExpression)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field name to source expression, for inspection and logging
    pub fn expressions(&self) -> BTreeMap<&str, &str> {
        self.iter().map(|(field, rule)| (field, rule.as_str())).collect()
    }
}

/// One failed constraint on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// What to do when rules are registered twice for the same message type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Overwrite,
}
