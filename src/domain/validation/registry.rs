use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use crate::domain::messages::{MessageType, RpcMessage};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use super::expression;
use super::rules::register_defaults;
use super::types::{DuplicatePolicy, FieldRuleSet};

static GLOBAL_REGISTRY: OnceLock<Arc<RuleRegistry>> = OnceLock::new();

/// Rule registry keyed by message type
#[derive(Debug, Default)]
pub struct RuleRegistry {
    pub(crate) rule_sets: HashMap<MessageType, FieldRuleSet>,
    policy: DuplicatePolicy,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            rule_sets: HashMap::new(),
            policy,
        }
    }

    /// Create a registry holding the video coordinator rule sets
    pub fn with_defaults(policy: DuplicatePolicy) -> AppResult<Self> {
        let mut registry = Self::new(policy);
        register_defaults(&mut registry)?;
        Ok(registry)
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register the field rules of a message type.
    ///
    /// Every field must exist on the message schema and every expression must
    /// parse; nothing is stored unless the whole set is valid.
    pub fn register<I, K, V>(&mut self, message_type: MessageType, field_rules: I) -> AppResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut rules = BTreeMap::new();

        for (field, source) in field_rules {
            let field = field.as_ref();
            if !message_type.has_field(field) {
                return Err(AppError::UnknownField {
                    message_type,
                    field: field.to_string(),
                });
            }

            let rule = expression::parse(source.as_ref()).map_err(|reason| AppError::InvalidRule {
                message_type,
                field: field.to_string(),
                reason,
            })?;

            if rules.insert(field.to_string(), rule).is_some() {
                return Err(AppError::InvalidRule {
                    message_type,
                    field: field.to_string(),
                    reason: "field given more than once".to_string(),
                });
            }
        }

        if rules.is_empty() {
            return Err(AppError::EmptyRuleSet { message_type });
        }

        let replaced = self.rule_sets.contains_key(&message_type);
        if replaced && self.policy == DuplicatePolicy::Reject {
            return Err(AppError::DuplicateRegistration { message_type });
        }

        let field_count = rules.len();
        self.rule_sets.insert(message_type, FieldRuleSet { rules });
        LoggingUtils::log_registration(message_type, field_count, replaced);

        Ok(())
    }

    /// Register rules for a message type given by its Rust type
    pub fn register_for<T, I, K, V>(&mut self, field_rules: I) -> AppResult<()>
    where
        T: RpcMessage,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.register(T::MESSAGE_TYPE, field_rules)
    }

    /// Get the rule set of a message type
    pub fn rules_for(&self, message_type: MessageType) -> Option<&FieldRuleSet> {
        self.rule_sets.get(&message_type)
    }

    pub fn is_registered(&self, message_type: MessageType) -> bool {
        self.rule_sets.contains_key(&message_type)
    }

    /// Registered message types in declaration order
    pub fn message_types(&self) -> Vec<MessageType> {
        let mut types: Vec<MessageType> = self.rule_sets.keys().copied().collect();
        types.sort();
        types
    }
}

/// Publish the registry as the process-wide instance. Succeeds once.
pub fn install(registry: RuleRegistry) -> AppResult<Arc<RuleRegistry>> {
    let shared = Arc::new(registry);
    GLOBAL_REGISTRY
        .set(Arc::clone(&shared))
        .map_err(|_| AppError::AlreadyInitialized)?;
    Ok(shared)
}

/// The process-wide registry, if `install` has run
pub fn global() -> Option<Arc<RuleRegistry>> {
    GLOBAL_REGISTRY.get().cloned()
}
