//! Mapping from typed requests to the (endpoint, signing identifier, body)
//! triple each remote operation expects.
//!
//! Building an [`Operation`] does no I/O; the client signs and sends it.

use serde_json::{Map, Value};

use crate::constants::*;
use crate::types::{DepositRequest, PlnInquiryRequest, PriceListRequest, TransactionRequest};

/// JSON object sent as the request body.
pub type RequestBody = Map<String, Value>;

/// Postpaid command discriminator on the transaction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PascaCommand {
    Inquiry,
    Payment,
    Status,
}

impl PascaCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PascaCommand::Inquiry => "inq-pasca",
            PascaCommand::Payment => "pay-pasca",
            PascaCommand::Status => "status-pasca",
        }
    }
}

/// A request ready to be signed and sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub endpoint: &'static str,
    pub sign_identifier: String,
    pub body: RequestBody,
}

impl Operation {
    fn new(endpoint: &'static str, sign_identifier: impl Into<String>) -> Self {
        Self {
            endpoint,
            sign_identifier: sign_identifier.into(),
            body: RequestBody::new(),
        }
    }

    fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    fn optional_field(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn check_balance() -> Self {
        Self::new(BALANCE_PATH, BALANCE_SIGN_ID).field("cmd", "deposit")
    }

    pub fn deposit(req: &DepositRequest) -> Self {
        // The API expects a capitalized `Bank` key.
        Self::new(DEPOSIT_PATH, DEPOSIT_SIGN_ID)
            .field("amount", req.amount)
            .field("Bank", req.bank.as_str())
            .field("owner_name", req.owner_name.as_str())
    }

    pub fn price_list(req: &PriceListRequest) -> Self {
        Self::new(PRICE_LIST_PATH, PRICE_LIST_SIGN_ID)
            .field("cmd", req.cmd.as_str())
            .optional_field("category", req.category.as_deref())
            .optional_field("brand", req.brand.as_deref())
            .optional_field("type", req.product_type.as_deref())
    }

    pub fn top_up(req: &TransactionRequest) -> Self {
        Self::new(TRANSACTION_PATH, req.ref_id.as_str())
            .field("buyer_sku_code", req.buyer_sku_code.as_str())
            .field("customer_no", req.customer_no.as_str())
            .field("ref_id", req.ref_id.as_str())
            .field("testing", req.testing)
            .optional_field("max_price", req.max_price)
    }

    pub fn pasca(command: PascaCommand, req: &TransactionRequest) -> Self {
        Self::new(TRANSACTION_PATH, req.ref_id.as_str())
            .field("commands", command.as_str())
            .field("buyer_sku_code", req.buyer_sku_code.as_str())
            .field("customer_no", req.customer_no.as_str())
            .field("ref_id", req.ref_id.as_str())
            .optional_field("testing", req.testing.then_some(true))
    }

    /// Signed with the customer number, unlike every other endpoint.
    pub fn pln_inquiry(req: &PlnInquiryRequest) -> Self {
        Self::new(PLN_INQUIRY_PATH, req.customer_no.as_str())
            .field("customer_no", req.customer_no.as_str())
    }
}
