//! Webhook receiver for Digiflazz transaction callbacks.
//!
//! Verifies the `X-Hub-Signature` HMAC on every inbound POST, decodes the
//! event named by `X-Digiflazz-Event`, and hands it to a [`WebhookHandler`].
//! Signature and payload logic live in the core [`digiflazz`] crate; this
//! crate provides the HTTP server around it.
//!
//! # Modules
//!
//! - [`routes`]: HTTP endpoints (webhook, health, metrics)
//! - [`state`]: Shared [`WebhookState`](state::WebhookState)
//! - [`handler`]: The [`WebhookHandler`] trait and a logging implementation
//! - [`metrics`]: Prometheus counters for accepted and rejected webhooks

pub mod handler;
pub mod metrics;
pub mod routes;
pub mod state;

pub use handler::{LoggingHandler, WebhookHandler};
pub use state::WebhookState;
