//! Request and response records for the Digiflazz buyer API.

use serde::{Deserialize, Serialize};

use crate::response_code::ResponseCode;

/// Response from the balance check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceResponse {
    pub deposit: f64,
}

/// Banks accepted for deposit tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bank {
    Bca,
    Mandiri,
    Bri,
    Bni,
}

impl Bank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bank::Bca => "BCA",
            Bank::Mandiri => "MANDIRI",
            Bank::Bri => "BRI",
            Bank::Bni => "BNI",
        }
    }
}

/// Parameters for a deposit ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub amount: u64,
    pub bank: Bank,
    pub owner_name: String,
}

impl DepositRequest {
    pub fn new(amount: u64, bank: Bank, owner_name: impl Into<String>) -> Self {
        Self {
            amount,
            bank,
            owner_name: owner_name.into(),
        }
    }
}

/// Deposit ticket issued by Digiflazz. `amount` includes the unique
/// transfer digits the buyer must send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositResponse {
    pub rc: Option<ResponseCode>,
    pub amount: f64,
    pub notes: String,
}

/// Which price list to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceListKind {
    #[default]
    Prepaid,
    Pasca,
}

impl PriceListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceListKind::Prepaid => "prepaid",
            PriceListKind::Pasca => "pasca",
        }
    }
}

/// Price list query. Filters are sent only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListRequest {
    pub cmd: PriceListKind,
    pub category: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

impl PriceListRequest {
    pub fn prepaid() -> Self {
        Self::default()
    }

    pub fn pasca() -> Self {
        Self {
            cmd: PriceListKind::Pasca,
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }
}

/// One entry of the price list. Postpaid entries carry `admin` and
/// `commission` instead of a price and stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceListItem {
    pub product_name: String,
    pub category: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub seller_name: String,
    pub price: f64,
    pub buyer_sku_code: String,
    pub buyer_product_status: bool,
    pub seller_product_status: bool,
    pub unlimited_stock: bool,
    pub stock: i64,
    pub multi: bool,
    pub start_cut_off: String,
    pub end_cut_off: String,
    pub desc: String,
    pub admin: Option<f64>,
    pub commission: Option<f64>,
}

/// Parameters shared by top-ups and postpaid commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub buyer_sku_code: String,
    pub customer_no: String,
    /// Caller-assigned unique id; also the signing identifier.
    pub ref_id: String,
    /// Route to the Digiflazz sandbox instead of a real seller.
    pub testing: bool,
    /// Reject the purchase if the seller price is above this amount.
    pub max_price: Option<u64>,
}

impl TransactionRequest {
    pub fn new(
        buyer_sku_code: impl Into<String>,
        customer_no: impl Into<String>,
        ref_id: impl Into<String>,
    ) -> Self {
        Self {
            buyer_sku_code: buyer_sku_code.into(),
            customer_no: customer_no.into(),
            ref_id: ref_id.into(),
            testing: false,
            max_price: None,
        }
    }

    pub fn testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    pub fn max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }
}

/// Transaction record returned by top-ups and status checks, and delivered
/// by `create`/`update` webhooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionResponse {
    pub ref_id: String,
    pub customer_no: String,
    pub buyer_sku_code: String,
    pub message: String,
    pub status: String,
    pub rc: Option<ResponseCode>,
    /// Serial number / voucher code issued by the seller.
    pub sn: String,
    pub buyer_last_saldo: f64,
    pub price: f64,
    pub tele: String,
    pub wa: String,
}

/// Postpaid bill, returned by inquiry and payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryPascaResponse {
    #[serde(flatten)]
    pub transaction: TransactionResponse,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub admin: f64,
    #[serde(default)]
    pub selling_price: f64,
    /// Product-specific bill details (periods, penalties, tariff).
    #[serde(default)]
    pub desc: Option<serde_json::Value>,
}

/// PLN customer number to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlnInquiryRequest {
    pub customer_no: String,
}

impl PlnInquiryRequest {
    pub fn new(customer_no: impl Into<String>) -> Self {
        Self {
            customer_no: customer_no.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlnInquiryResponse {
    pub message: String,
    pub status: String,
    pub rc: Option<ResponseCode>,
    pub customer_no: String,
    pub meter_no: String,
    pub subscriber_id: String,
    pub name: String,
    pub segment_power: String,
}
