//! Request signing.
//!
//! Every request body carries `username` and `sign`, where `sign` is the hex
//! MD5 digest of `username || api_key || identifier`. The identifier depends
//! on the endpoint: a fixed literal for account endpoints, the ref id for
//! transactions, and the customer number for PLN inquiries.

use std::fmt;

use serde_json::Value;

use crate::operation::RequestBody;

/// Compute the Digiflazz request signature.
///
/// MD5 is what the remote API verifies; it is not used for any local
/// security decision.
pub fn generate_sign(username: &str, api_key: &str, identifier: &str) -> String {
    let mut data = String::with_capacity(username.len() + api_key.len() + identifier.len());
    data.push_str(username);
    data.push_str(api_key);
    data.push_str(identifier);
    format!("{:x}", md5::compute(data.as_bytes()))
}

/// Buyer credentials issued by Digiflazz.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Signature for the given identifier.
    pub fn sign(&self, identifier: &str) -> String {
        generate_sign(&self.username, &self.api_key, identifier)
    }

    /// Inject `username` and `sign` into a request body.
    pub fn attach(&self, body: &mut RequestBody, identifier: &str) {
        body.insert("username".to_string(), Value::from(self.username.as_str()));
        body.insert("sign".to_string(), Value::from(self.sign(identifier)));
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
