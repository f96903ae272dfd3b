//! Inbound webhook payloads.
//!
//! Digiflazz posts transaction state changes to the buyer's callback URL.
//! The event name travels in `X-Digiflazz-Event`; the body is signed with
//! the secret configured in the dashboard (see [`crate::hmac`]).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::WebhookError;
use crate::types::TransactionResponse;

/// Transaction record delivered by `create` and `update` events.
pub type WebhookTransaction = TransactionResponse;

/// Hook descriptor sent with a `ping` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    pub url: String,
    pub secret: String,
    #[serde(rename = "type")]
    pub hook_type: String,
    pub status: i64,
}

/// Sent once when a webhook is registered or tested from the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingEvent {
    pub sed: String,
    pub hook_id: String,
    pub hook: Hook,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    Create(WebhookTransaction),
    Update(WebhookTransaction),
    Ping(PingEvent),
}

/// Decode a payload that may arrive wrapped in the `{"data": ...}` envelope.
///
/// When the top-level object has a `data` key, only that value is decoded;
/// it never falls back to reading the outer object as `T`.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, WebhookError> {
    let mut value: serde_json::Value = serde_json::from_slice(body)?;
    let data = value.as_object_mut().and_then(|obj| obj.remove("data"));
    Ok(serde_json::from_value(data.unwrap_or(value))?)
}

impl WebhookEvent {
    /// Decode a webhook body for the given `X-Digiflazz-Event` value.
    ///
    /// Payloads are accepted either bare or wrapped in the `{"data": ...}`
    /// envelope. A wrapped payload of the wrong shape is an error.
    pub fn parse(event: &str, body: &[u8]) -> Result<Self, WebhookError> {
        match event.trim().to_ascii_lowercase().as_str() {
            "" => Err(WebhookError::MissingEvent),
            "create" => Ok(WebhookEvent::Create(decode(body)?)),
            "update" => Ok(WebhookEvent::Update(decode(body)?)),
            "ping" => Ok(WebhookEvent::Ping(decode(body)?)),
            other => Err(WebhookError::UnknownEvent(other.to_string())),
        }
    }

    /// Event name as sent in `X-Digiflazz-Event`.
    pub fn name(&self) -> &'static str {
        match self {
            WebhookEvent::Create(_) => "create",
            WebhookEvent::Update(_) => "update",
            WebhookEvent::Ping(_) => "ping",
        }
    }

    pub fn transaction(&self) -> Option<&WebhookTransaction> {
        match self {
            WebhookEvent::Create(tx) | WebhookEvent::Update(tx) => Some(tx),
            WebhookEvent::Ping(_) => None,
        }
    }
}

/// Verify the signature, then decode the event.
pub fn verify_and_parse(
    secret: &[u8],
    body: &[u8],
    signature_header: &str,
    event: &str,
) -> Result<WebhookEvent, WebhookError> {
    crate::hmac::verify_signature(secret, body, signature_header)?;
    WebhookEvent::parse(event, body)
}
