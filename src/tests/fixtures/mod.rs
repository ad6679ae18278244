//! Request fixtures

use crate::domain::messages::{AddDeviceRequest, CreateCallRequest, UpdateCallRequest};
use serde_json::{json, Value};

pub fn valid_create_call() -> CreateCallRequest {
    CreateCallRequest {
        call_type: "default".to_string(),
        id: "call-123".to_string(),
        participant_ids: vec!["alice".to_string(), "bob".to_string()],
    }
}

pub fn valid_update_call() -> UpdateCallRequest {
    UpdateCallRequest {
        call_type: "default".to_string(),
        id: "call-123".to_string(),
    }
}

pub fn valid_add_device() -> AddDeviceRequest {
    AddDeviceRequest {
        user_id: "alice".to_string(),
        id: "device-token-1".to_string(),
        push_provider_name: "firebase".to_string(),
    }
}

pub fn participants(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("participant-{}", i)).collect()
}

pub fn create_call_payload() -> Value {
    json!({
        "type": "default",
        "id": "call-123",
        "participantIds": ["alice", "bob"]
    })
}

pub fn add_device_payload(provider: &str) -> Value {
    json!({
        "userId": "alice",
        "id": "device-token-1",
        "pushProviderName": provider
    })
}
