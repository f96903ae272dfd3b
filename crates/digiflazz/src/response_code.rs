//! Response status codes (`rc`) embedded in Digiflazz payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! response_codes {
    ($($(#[$meta:meta])* $variant:ident => $code:literal, $desc:literal;)+) => {
        /// Two-digit status code reported by the remote API.
        ///
        /// Codes not in the documented table are kept verbatim in
        /// [`ResponseCode::Other`].
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum ResponseCode {
            $($(#[$meta])* $variant,)+
            /// Undocumented code.
            Other(String),
        }

        impl ResponseCode {
            /// Every documented code, in numeric order.
            pub const ALL: &'static [ResponseCode] = &[$(ResponseCode::$variant,)+];

            /// Parse a wire code. Unknown codes map to [`ResponseCode::Other`].
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($code => ResponseCode::$variant,)+
                    other => ResponseCode::Other(other.to_string()),
                }
            }

            /// Wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $(ResponseCode::$variant => $code,)+
                    ResponseCode::Other(code) => code,
                }
            }

            /// Human-readable meaning of the code.
            pub fn description(&self) -> &'static str {
                match self {
                    $(ResponseCode::$variant => $desc,)+
                    ResponseCode::Other(_) => "unknown response code",
                }
            }
        }
    };
}

response_codes! {
    Success => "00", "transaction successful";
    Timeout => "01", "timeout";
    TransactionFailed => "02", "transaction failed";
    Pending => "03", "transaction pending";
    PayloadError => "40", "payload error";
    InvalidSignature => "41", "invalid signature";
    BuyerApiFailed => "42", "failed to process buyer API request";
    SkuNotFound => "43", "SKU not found or inactive";
    InsufficientBalance => "44", "insufficient balance";
    IpNotRecognized => "45", "IP address not recognized";
    TransactionExistsForOtherBuyer => "47", "transaction already processed for another buyer";
    DuplicateRefId => "49", "ref id is not unique";
    TransactionNotFound => "50", "transaction not found";
    DestinationBlocked => "51", "destination number blocked";
    PrefixMismatch => "52", "prefix does not match operator";
    SellerProductUnavailable => "53", "seller product unavailable";
    DestinationInvalid => "54", "destination number invalid";
    ProductDisrupted => "55", "product disrupted";
    SellerBalanceLimit => "56", "seller balance limit reached";
    InvalidDigitCount => "57", "digit count too short or too long";
    CutOff => "58", "cut-off in progress";
    DestinationOutOfArea => "59", "destination outside service area";
    BillNotAvailable => "60", "bill not yet available";
    NoDepositHistory => "61", "no deposit history";
    SellerDisrupted => "62", "seller disrupted";
    MultiTransactionUnsupported => "63", "multi transactions not supported";
    DepositTicketFailed => "64", "deposit ticket request failed";
    MultiTransactionLimit => "65", "multi transaction limit reached";
    SellerMaintenanceCutOff => "66", "cut-off for seller system maintenance";
    SellerNotVerified => "67", "seller not verified";
    StockEmpty => "68", "stock empty";
    PriceExceedsLimit => "69", "seller price exceeds buyer price limit";
    BillerTimeout => "70", "biller timeout";
    ProductUnstable => "71", "product unstable";
    UnregisterPackageFirst => "72", "unregister current package first";
    KwhExceedsLimit => "73", "kWh exceeds limit";
    TransactionRefunded => "74", "transaction refunded";
    AccountBlockedBySeller => "80", "account blocked by seller";
    SellerBlockedByBuyer => "81", "seller blocked by buyer";
    AccountNotVerified => "82", "account not verified";
    PriceListLimitReached => "83", "price list check limit reached";
    InvalidAmount => "84", "invalid amount";
    TransactionLimitReached => "85", "transaction limit reached";
    PlnCheckLimitReached => "86", "PLN number check limit reached";
    /// Digiflazz reports this as pending.
    RouterIssue => "99", "router issue";
}

impl ResponseCode {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Success)
    }

    /// The transaction is still in flight and its final state will arrive
    /// later, by webhook or status check.
    pub fn is_pending(&self) -> bool {
        matches!(self, ResponseCode::Pending | ResponseCode::RouterIssue)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success() && !self.is_pending()
    }
}

impl From<String> for ResponseCode {
    fn from(code: String) -> Self {
        match ResponseCode::from_code(&code) {
            ResponseCode::Other(_) => ResponseCode::Other(code),
            known => known,
        }
    }
}

impl From<&str> for ResponseCode {
    fn from(code: &str) -> Self {
        ResponseCode::from_code(code)
    }
}

impl From<ResponseCode> for String {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
