//! Response envelope handling.
//!
//! Every response is `{"data": <payload>}`. Decoding happens in two phases:
//! the envelope is read with the payload kept as raw JSON, the payload is
//! checked for a non-success `rc`, and only then is it decoded into the
//! caller's target type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{ApiError, DigiflazzError, Result};
use crate::response_code::ResponseCode;

/// The `{"data": ...}` wrapper around every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Deserialize)]
struct StatusPeek {
    #[serde(default)]
    rc: Option<ResponseCode>,
}

#[derive(Deserialize)]
struct ApiErrorFields {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Decode a response body into `T`, surfacing business errors.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<Box<RawValue>> =
        serde_json::from_slice(body).map_err(|source| DigiflazzError::Decode {
            context: "response envelope",
            source,
        })?;
    let payload = envelope.data.get();

    if let Some(err) = business_error(payload) {
        return Err(err.into());
    }

    serde_json::from_str(payload).map_err(|source| DigiflazzError::Decode {
        context: "response data",
        source,
    })
}

/// Peek at the payload's `rc`. Only objects with a non-empty code other
/// than `00` are errors; payloads without a readable `rc` (arrays, numeric
/// codes) pass through to the target decode.
fn business_error(payload: &str) -> Option<ApiError> {
    if !payload.trim_start().starts_with('{') {
        return None;
    }
    let peek: StatusPeek = serde_json::from_str(payload).ok()?;
    let rc = peek.rc.filter(|rc| !rc.as_str().is_empty())?;
    if rc.is_success() {
        return None;
    }

    let fields: ApiErrorFields = serde_json::from_str(payload).unwrap_or(ApiErrorFields {
        message: None,
        status: None,
    });
    Some(ApiError {
        rc,
        message: fields.message.unwrap_or_default(),
        status: fields.status.unwrap_or_default(),
        payload: serde_json::from_str(payload).unwrap_or_default(),
    })
}
