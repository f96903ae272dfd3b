use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::constants::API_BASE_URL;
use crate::envelope::decode_response;
use crate::error::{DigiflazzError, Result};
use crate::operation::{Operation, PascaCommand};
use crate::sign::Credentials;
use crate::types::{
    BalanceResponse, DepositRequest, DepositResponse, InquiryPascaResponse, PlnInquiryRequest,
    PlnInquiryResponse, PriceListItem, PriceListRequest, TransactionRequest, TransactionResponse,
};

/// Client for the Digiflazz buyer API.
///
/// Wraps `reqwest::Client`. Each call is a single signed POST; nothing is
/// retried. The client holds no per-call state, so clones share the
/// underlying connection pool and can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct DigiflazzClient {
    credentials: Credentials,
    base_url: String,
    http: reqwest::Client,
}

impl DigiflazzClient {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_http_client(Credentials::new(username, api_key), reqwest::Client::new())
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_http_client(credentials: Credentials, http: reqwest::Client) -> Self {
        Self {
            credentials,
            base_url: API_BASE_URL.to_string(),
            http,
        }
    }

    /// Validate `config` and build a client from it.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| DigiflazzError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            credentials: Credentials::new(config.username, config.api_key),
            base_url: trim_base_url(&config.base_url),
            http,
        })
    }

    /// Point the client at a different API root (sandbox, mock server).
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = trim_base_url(base_url.as_ref());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign, send and decode one operation.
    pub async fn execute<T: DeserializeOwned>(&self, operation: Operation) -> Result<T> {
        let Operation {
            endpoint,
            sign_identifier,
            mut body,
        } = operation;
        self.credentials.attach(&mut body, &sign_identifier);

        let payload = serde_json::to_vec(&body).map_err(DigiflazzError::Encode)?;
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(endpoint, "sending digiflazz request");

        let resp = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| DigiflazzError::Http(format!("request to {endpoint} failed: {e}")))?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| {
            DigiflazzError::Http(format!("failed to read response from {endpoint}: {e}"))
        })?;

        if !status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "non-success http status");
            return Err(DigiflazzError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        match decode_response(&bytes) {
            Ok(decoded) => {
                tracing::debug!(endpoint, "digiflazz request succeeded");
                Ok(decoded)
            }
            Err(DigiflazzError::Api(err)) => {
                tracing::warn!(
                    endpoint,
                    rc = %err.rc,
                    status = %err.status,
                    message = %err.message,
                    "digiflazz rejected request"
                );
                Err(DigiflazzError::Api(err))
            }
            Err(e) => Err(e),
        }
    }

    /// Remaining deposit balance.
    pub async fn check_balance(&self) -> Result<BalanceResponse> {
        self.execute(Operation::check_balance()).await
    }

    /// Request a deposit ticket (bank transfer instructions).
    pub async fn request_deposit(&self, req: &DepositRequest) -> Result<DepositResponse> {
        self.execute(Operation::deposit(req)).await
    }

    /// Product price list, in the order the API returns it.
    pub async fn price_list(&self, req: &PriceListRequest) -> Result<Vec<PriceListItem>> {
        self.execute(Operation::price_list(req)).await
    }

    /// Buy a prepaid product.
    pub async fn top_up(&self, req: &TransactionRequest) -> Result<TransactionResponse> {
        self.execute(Operation::top_up(req)).await
    }

    /// Look up a postpaid bill.
    pub async fn inquiry_pasca(&self, req: &TransactionRequest) -> Result<InquiryPascaResponse> {
        self.execute(Operation::pasca(PascaCommand::Inquiry, req)).await
    }

    /// Pay a postpaid bill previously looked up with the same ref id.
    pub async fn pay_pasca(&self, req: &TransactionRequest) -> Result<InquiryPascaResponse> {
        self.execute(Operation::pasca(PascaCommand::Payment, req)).await
    }

    /// Current state of an existing transaction.
    pub async fn check_status(&self, req: &TransactionRequest) -> Result<TransactionResponse> {
        self.execute(Operation::pasca(PascaCommand::Status, req)).await
    }

    /// Validate a PLN customer number.
    pub async fn inquiry_pln(&self, req: &PlnInquiryRequest) -> Result<PlnInquiryResponse> {
        self.execute(Operation::pln_inquiry(req)).await
    }
}

fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
