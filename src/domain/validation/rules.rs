//! Validation rules of the video coordinator request messages

use crate::domain::messages::{AddDeviceRequest, CreateCallRequest, UpdateCallRequest};
use crate::shared::error::AppResult;
use super::registry::RuleRegistry;

pub const CREATE_CALL_RULES: &[(&str, &str)] = &[
    ("Type", "required,max=255"),
    ("Id", "required,max=255"),
    ("ParticipantIds", "max=100"),
];

pub const UPDATE_CALL_RULES: &[(&str, &str)] = &[
    ("Type", "required,max=255"),
    ("Id", "required,max=255"),
];

pub const ADD_DEVICE_RULES: &[(&str, &str)] = &[
    ("UserId", "required,max=255"),
    ("Id", "required,max=255"),
    ("PushProviderName", "required,oneof=firebase,huawei,apn,xiaomi"),
];

/// Register the rule sets of all three request messages
pub fn register_defaults(registry: &mut RuleRegistry) -> AppResult<()> {
    registry.register_for::<CreateCallRequest, _, _, _>(CREATE_CALL_RULES.iter().copied())?;
    registry.register_for::<UpdateCallRequest, _, _, _>(UPDATE_CALL_RULES.iter().copied())?;
    registry.register_for::<AddDeviceRequest, _, _, _>(ADD_DEVICE_RULES.iter().copied())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use crate::domain::messages::MessageType;
    use crate::domain::validation::types::DuplicatePolicy;

    fn expected(rules: &[(&'static str, &'static str)]) -> BTreeMap<&'static str, &'static str> {
        rules.iter().copied().collect()
    }

    #[test]
    fn defaults_match_declared_tables_exactly() {
        let registry = RuleRegistry::with_defaults(DuplicatePolicy::Reject).unwrap();

        let create = registry.rules_for(MessageType::CreateCall).unwrap();
        assert_eq!(create.expressions(), expected(CREATE_CALL_RULES));
        assert_eq!(create.len(), 3);

        let update = registry.rules_for(MessageType::UpdateCall).unwrap();
        assert_eq!(update.expressions(), expected(UPDATE_CALL_RULES));
        assert_eq!(update.len(), 2);

        let device = registry.rules_for(MessageType::AddDevice).unwrap();
        assert_eq!(device.expressions(), expected(ADD_DEVICE_RULES));
        assert_eq!(device.len(), 3);
    }

    #[test]
    fn defaults_cannot_be_registered_twice_under_reject() {
        let mut registry = RuleRegistry::with_defaults(DuplicatePolicy::Reject).unwrap();
        assert!(register_defaults(&mut registry).is_err());
    }

    #[test]
    fn defaults_are_idempotent_under_overwrite() {
        let mut registry = RuleRegistry::with_defaults(DuplicatePolicy::Overwrite).unwrap();
        register_defaults(&mut registry).unwrap();
        assert_eq!(
            registry.rules_for(MessageType::AddDevice).unwrap().expressions(),
            expected(ADD_DEVICE_RULES)
        );
    }
}
