//! HMAC-SHA1 webhook signatures (`X-Hub-Signature: sha1=<hex>`).

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::WebhookError;

type HmacSha1 = Hmac<Sha1>;

const ALGORITHM: &str = "sha1";

fn keyed(secret: &[u8]) -> HmacSha1 {
    // HMAC takes keys of any length, so this cannot fail.
    <HmacSha1 as Mac>::new_from_slice(secret).expect("HMAC accepts any key length")
}

/// Hex-encoded HMAC-SHA1 of `body` keyed by `secret`.
pub fn compute_hmac(secret: &[u8], body: &[u8]) -> String {
    let mut mac = keyed(secret);
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Header value Digiflazz would send for `body`: `sha1=<hex>`.
pub fn signature_header(secret: &[u8], body: &[u8]) -> String {
    format!("{ALGORITHM}={}", compute_hmac(secret, body))
}

/// Verify an `X-Hub-Signature` header against the raw request body.
///
/// The digest comparison is constant-time. A digest that is not valid
/// lowercase hex is reported as a mismatch.
pub fn verify_signature(secret: &[u8], body: &[u8], header: &str) -> Result<(), WebhookError> {
    if header.is_empty() {
        return Err(WebhookError::MissingSignature);
    }

    let (algorithm, digest) = header
        .split_once('=')
        .ok_or_else(|| WebhookError::InvalidFormat(header.to_string()))?;
    if algorithm != ALGORITHM {
        return Err(WebhookError::UnsupportedAlgorithm(algorithm.to_string()));
    }

    // Digests are lowercase hex, compared exactly.
    if digest.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(WebhookError::SignatureMismatch);
    }
    let provided = hex::decode(digest).map_err(|_| WebhookError::SignatureMismatch)?;
    let mut mac = keyed(secret);
    mac.update(body);
    mac.verify_slice(&provided)
        .map_err(|_| WebhookError::SignatureMismatch)
}
