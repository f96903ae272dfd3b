use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::response_code::ResponseCode;

/// Errors returned by Digiflazz client operations.
#[derive(Debug, Error)]
pub enum DigiflazzError {
    /// The exchange could not complete (connect, TLS, body read).
    #[error("http error: {0}")]
    Http(String),

    /// The remote answered with a non-2xx status.
    #[error("unexpected http status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The outer envelope or the inner payload did not have the expected shape.
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP succeeded but the payload carried a non-success `rc`.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("config error: {0}")]
    Config(String),
}

impl DigiflazzError {
    /// The business response code, when this is an [`ApiError`].
    pub fn response_code(&self) -> Option<&ResponseCode> {
        match self {
            DigiflazzError::Api(err) => Some(&err.rc),
            _ => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            DigiflazzError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Business-level failure reported inside a successful HTTP response.
///
/// Pending transactions are reported this way too; check
/// [`ApiError::is_pending`] and read the transaction from
/// [`ApiError::decode_payload`] to track them.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("digiflazz api error: {message} (rc: {rc}, status: {status})")]
pub struct ApiError {
    pub rc: ResponseCode,
    pub message: String,
    pub status: String,
    /// The full `data` payload the error was decoded from.
    pub payload: serde_json::Value,
}

impl ApiError {
    pub fn is_pending(&self) -> bool {
        self.rc.is_pending()
    }

    /// Decode the raw payload into a typed record.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

/// Errors from verifying or decoding an inbound webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("missing X-Hub-Signature header")]
    MissingSignature,

    #[error("invalid signature format: {0}")]
    InvalidFormat(String),

    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("signature mismatch")]
    SignatureMismatch,

    #[error("missing X-Digiflazz-Event header")]
    MissingEvent,

    #[error("unknown webhook event: {0}")]
    UnknownEvent(String),

    #[error("invalid webhook payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl WebhookError {
    /// Authentication failures as opposed to malformed requests.
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            WebhookError::MissingSignature
                | WebhookError::InvalidFormat(_)
                | WebhookError::UnsupportedAlgorithm(_)
                | WebhookError::SignatureMismatch
        )
    }
}

pub type Result<T, E = DigiflazzError> = std::result::Result<T, E>;
