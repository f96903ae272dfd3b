/// Production base URL of the Digiflazz buyer API.
pub const API_BASE_URL: &str = "https://api.digiflazz.com/v1";

/// Balance check endpoint.
pub const BALANCE_PATH: &str = "/cek-saldo";

/// Deposit ticket endpoint.
pub const DEPOSIT_PATH: &str = "/deposit";

/// Price list endpoint.
pub const PRICE_LIST_PATH: &str = "/price-list";

/// Prepaid purchases and every postpaid command share this endpoint.
pub const TRANSACTION_PATH: &str = "/transaction";

/// PLN customer validation endpoint.
pub const PLN_INQUIRY_PATH: &str = "/inquiry-pln";

/// Signing identifier for the balance check.
pub const BALANCE_SIGN_ID: &str = "depo";

/// Signing identifier for deposit ticket requests.
pub const DEPOSIT_SIGN_ID: &str = "deposit";

/// Signing identifier for the price list.
pub const PRICE_LIST_SIGN_ID: &str = "pricelist";

/// Header carrying the `sha1=<hex>` webhook signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Header naming the webhook event (`create`, `update` or `ping`).
pub const EVENT_HEADER: &str = "X-Digiflazz-Event";
