//! Unit tests across the registry, validator and configuration

use crate::{
    domain::{
        messages::MessageType,
        validation::{self, DuplicatePolicy, RequestValidator, RuleRegistry},
    },
    shared::error::AppError,
    tests::{config, fixtures},
};
use std::sync::Arc;

fn default_validator() -> RequestValidator {
    config::init();
    let registry = RuleRegistry::with_defaults(DuplicatePolicy::Reject).unwrap();
    RequestValidator::new(Arc::new(registry))
}

#[test]
fn test_fixtures_pass_validation() {
    let validator = default_validator();
    assert!(validator.validate(&fixtures::valid_create_call()).is_ok());
    assert!(validator.validate(&fixtures::valid_update_call()).is_ok());
    assert!(validator.validate(&fixtures::valid_add_device()).is_ok());
}

#[test]
fn test_participant_limit_boundary() {
    let validator = default_validator();
    let mut request = fixtures::valid_create_call();

    request.participant_ids = fixtures::participants(100);
    assert!(validator.validate(&request).is_ok());

    request.participant_ids = fixtures::participants(101);
    let err = validator.validate(&request).unwrap_err();
    assert!(matches!(err, AppError::Validation { message_type: MessageType::CreateCall, .. }));
    assert_eq!(err.violations()[0].field, "ParticipantIds");
}

#[test]
fn test_type_and_id_length_boundary() {
    let validator = default_validator();
    let mut request = fixtures::valid_update_call();

    request.call_type = "t".repeat(255);
    request.id = "i".repeat(255);
    assert!(validator.validate(&request).is_ok());

    request.call_type = "t".repeat(256);
    let violations = validator.check(&request).unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "Type");
    assert_eq!(violations[0].constraint, "max");
}

#[test]
fn test_json_payloads() {
    let validator = default_validator();
    assert!(validator
        .validate_json(MessageType::CreateCall, &fixtures::create_call_payload())
        .is_ok());
    assert!(validator
        .validate_json(MessageType::AddDevice, &fixtures::add_device_payload("xiaomi"))
        .is_ok());

    let err = validator
        .validate_json(MessageType::AddDevice, &fixtures::add_device_payload("nokia"))
        .unwrap_err();
    assert_eq!(err.violations()[0].constraint, "oneof");
}

#[test]
fn test_payload_is_decoded_as_requested_type() {
    let validator = default_validator();
    // a create-call payload has no userId or pushProviderName
    let violations = match validator
        .validate_json(MessageType::AddDevice, &fixtures::create_call_payload())
    {
        Err(AppError::Validation { violations, .. }) => violations,
        other => panic!("unexpected result: {:?}", other),
    };
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["PushProviderName", "UserId"]);
}

#[test]
fn test_process_wide_initialization() {
    config::init();
    let cfg = config::test_config();

    let installed = crate::initialize(&cfg).unwrap();
    let global = validation::global().unwrap();
    assert!(Arc::ptr_eq(&installed, &global));
    assert_eq!(
        global.message_types(),
        vec![MessageType::CreateCall, MessageType::UpdateCall, MessageType::AddDevice]
    );

    assert_eq!(crate::initialize(&cfg).unwrap_err(), AppError::AlreadyInitialized);
    assert_eq!(
        validation::install(RuleRegistry::default()).unwrap_err(),
        AppError::AlreadyInitialized
    );

    let validator = RequestValidator::from_global().unwrap();
    for message_type in MessageType::ALL {
        assert!(validator.registry().is_registered(message_type));
    }
    assert!(validator.validate(&fixtures::valid_add_device()).is_ok());
}
