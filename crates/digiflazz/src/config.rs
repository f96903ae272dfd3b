//! Client configuration, built in code or read from the environment.

use std::fmt;
use std::time::Duration;

use crate::constants::API_BASE_URL;
use crate::error::{DigiflazzError, Result};

pub const ENV_USERNAME: &str = "DIGIFLAZZ_USERNAME";
pub const ENV_API_KEY: &str = "DIGIFLAZZ_API_KEY";
pub const ENV_BASE_URL: &str = "DIGIFLAZZ_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "DIGIFLAZZ_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub username: String,
    pub api_key: String,
    /// Defaults to the production API.
    pub base_url: String,
    /// Per-request timeout. `None` leaves deadlines to the caller.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `DIGIFLAZZ_USERNAME`, `DIGIFLAZZ_API_KEY` and the optional
    /// `DIGIFLAZZ_BASE_URL` / `DIGIFLAZZ_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DigiflazzError::Config(format!("{key} is required")))
        };

        let mut config = Self::new(required(ENV_USERNAME)?, required(ENV_API_KEY)?);

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DigiflazzError::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            if secs == 0 {
                return Err(DigiflazzError::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(DigiflazzError::Config("username must not be empty".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(DigiflazzError::Config("api key must not be empty".to_string()));
        }

        let url = url::Url::parse(&self.base_url).map_err(|e| {
            DigiflazzError::Config(format!("invalid base url {:?}: {e}", self.base_url))
        })?;
        match url.scheme() {
            "https" => {}
            "http" => tracing::warn!(
                base_url = %self.base_url,
                "base url does not use HTTPS, signed requests will be sent in cleartext"
            ),
            other => {
                return Err(DigiflazzError::Config(format!(
                    "unsupported base url scheme {other:?}"
                )))
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
