//! Client for the Digiflazz prepaid and postpaid transaction API.
//!
//! Covers balance checks, deposit tickets, price lists, prepaid top-ups,
//! postpaid bill inquiry/payment/status and PLN customer validation, plus
//! verification and decoding of the webhooks Digiflazz sends back.
//!
//! # Request flow
//!
//! - An [`Operation`] maps a typed request to its endpoint, signing
//!   identifier and JSON body
//! - [`DigiflazzClient`] injects `username` and the MD5 `sign`, POSTs the
//!   body, and unwraps the `{"data": ...}` [`Envelope`]
//! - A payload whose `rc` is not `00` becomes [`DigiflazzError::Api`], even
//!   though the HTTP call succeeded
//!
//! # Quick example
//!
//! ```no_run
//! use digiflazz::{DigiflazzClient, TransactionRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), digiflazz::DigiflazzError> {
//! let client = DigiflazzClient::new("username", "api-key");
//!
//! let balance = client.check_balance().await?;
//! println!("deposit: {}", balance.deposit);
//!
//! let tx = client
//!     .top_up(&TransactionRequest::new("xld10", "087800001230", "order-1001"))
//!     .await?;
//! println!("{} -> {}", tx.ref_id, tx.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod hmac;
pub mod operation;
pub mod response_code;
pub mod sign;
pub mod types;
pub mod webhook;

// Re-exports
pub use client::DigiflazzClient;
pub use config::ClientConfig;
pub use constants::*;
pub use envelope::{decode_response, Envelope};
pub use error::{ApiError, DigiflazzError, Result, WebhookError};
pub use hmac::{compute_hmac, signature_header, verify_signature};
pub use operation::{Operation, PascaCommand, RequestBody};
pub use response_code::ResponseCode;
pub use sign::{generate_sign, Credentials};
pub use types::*;
pub use webhook::{verify_and_parse, Hook, PingEvent, WebhookEvent, WebhookTransaction};
