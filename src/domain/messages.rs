//! Request messages of the video coordinator RPC service
//!
//! Only the fields that carry validation rules are modelled here; the wire
//! framing of the messages belongs to the transport layer.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Message type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "CreateCallRequest")]
    CreateCall,
    #[serde(rename = "UpdateCallRequest")]
    UpdateCall,
    #[serde(rename = "AddDeviceRequest")]
    AddDevice,
}

impl MessageType {
    pub const ALL: [MessageType; 3] = [
        MessageType::CreateCall,
        MessageType::UpdateCall,
        MessageType::AddDevice,
    ];

    /// Schema name of the message
    pub fn name(&self) -> &'static str {
        match self {
            MessageType::CreateCall => "CreateCallRequest",
            MessageType::UpdateCall => "UpdateCallRequest",
            MessageType::AddDevice => "AddDeviceRequest",
        }
    }

    /// Field names declared on the message schema
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            MessageType::CreateCall => CreateCallRequest::FIELDS,
            MessageType::UpdateCall => UpdateCallRequest::FIELDS,
            MessageType::AddDevice => AddDeviceRequest::FIELDS,
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields().contains(&name)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed view of a message field as seen by the rule evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Character count for text, element count for lists
    pub fn size(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.chars().count(),
            FieldValue::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Decode an explicit JSON `null` as the field's empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A request message that rules can be registered for
pub trait RpcMessage: DeserializeOwned {
    const MESSAGE_TYPE: MessageType;

    /// Look up a field by its schema name
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCallRequest {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub call_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub participant_ids: Vec<String>,
}

impl CreateCallRequest {
    pub const FIELDS: &'static [&'static str] = &["Type", "Id", "ParticipantIds"];
}

impl RpcMessage for CreateCallRequest {
    const MESSAGE_TYPE: MessageType = MessageType::CreateCall;

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Type" => Some(FieldValue::Text(&self.call_type)),
            "Id" => Some(FieldValue::Text(&self.id)),
            "ParticipantIds" => Some(FieldValue::List(&self.participant_ids)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCallRequest {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub call_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

impl UpdateCallRequest {
    pub const FIELDS: &'static [&'static str] = &["Type", "Id"];
}

impl RpcMessage for UpdateCallRequest {
    const MESSAGE_TYPE: MessageType = MessageType::UpdateCall;

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Type" => Some(FieldValue::Text(&self.call_type)),
            "Id" => Some(FieldValue::Text(&self.id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddDeviceRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub push_provider_name: String,
}

impl AddDeviceRequest {
    pub const FIELDS: &'static [&'static str] = &["UserId", "Id", "PushProviderName"];
}

impl RpcMessage for AddDeviceRequest {
    const MESSAGE_TYPE: MessageType = MessageType::AddDevice;

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "UserId" => Some(FieldValue::Text(&self.user_id)),
            "Id" => Some(FieldValue::Text(&self.id)),
            "PushProviderName" => Some(FieldValue::Text(&self.push_provider_name)),
            _ => None,
        }
    }
}
