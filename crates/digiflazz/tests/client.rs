//! End-to-end tests for `DigiflazzClient` against a mock Digiflazz API.

use digiflazz::{
    generate_sign, Bank, DepositRequest, DigiflazzClient, DigiflazzError, PlnInquiryRequest,
    PriceListRequest, ResponseCode, TransactionRequest,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const USERNAME: &str = "buyer01";
const API_KEY: &str = "dev-7f1c2a";

async fn setup() -> (MockServer, DigiflazzClient) {
    let server = MockServer::start().await;
    let client =
        DigiflazzClient::new(USERNAME, API_KEY).with_base_url(format!("{}/v1", server.uri()));
    (server, client)
}

fn sign(identifier: &str) -> String {
    generate_sign(USERNAME, API_KEY, identifier)
}

#[tokio::test]
async fn test_check_balance() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/cek-saldo"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "cmd": "deposit",
            "username": USERNAME,
            "sign": sign("depo"),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deposit": 1250000}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client.check_balance().await.unwrap();
    assert_eq!(balance.deposit, 1_250_000.0);
}

#[tokio::test]
async fn test_request_deposit() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/deposit"))
        .and(body_partial_json(json!({
            "amount": 200000,
            "Bank": "BRI",
            "owner_name": "Budi Santoso",
            "sign": sign("deposit"),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"rc": "00", "amount": 200123, "notes": "Transfer ke BRI 0000000000"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = client
        .request_deposit(&DepositRequest::new(200_000, Bank::Bri, "Budi Santoso"))
        .await
        .unwrap();
    assert_eq!(ticket.rc, Some(ResponseCode::Success));
    assert_eq!(ticket.amount, 200_123.0);
    assert!(ticket.notes.contains("BRI"));
}

#[tokio::test]
async fn test_price_list_preserves_order() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/price-list"))
        .and(body_partial_json(json!({"cmd": "prepaid", "sign": sign("pricelist")})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "product_name": "Telkomsel 5.000",
                    "category": "Pulsa",
                    "brand": "TELKOMSEL",
                    "type": "Umum",
                    "seller_name": "Seller A",
                    "price": 5350,
                    "buyer_sku_code": "tsel5",
                    "buyer_product_status": true,
                    "seller_product_status": true,
                    "unlimited_stock": true,
                    "stock": 0,
                    "multi": true,
                    "start_cut_off": "23:45",
                    "end_cut_off": "00:15",
                    "desc": "Pulsa Telkomsel Rp 5.000"
                },
                {
                    "product_name": "Telkomsel 10.000",
                    "category": "Pulsa",
                    "brand": "TELKOMSEL",
                    "type": "Umum",
                    "seller_name": "Seller B",
                    "price": 10275,
                    "buyer_sku_code": "tsel10",
                    "buyer_product_status": true,
                    "seller_product_status": false,
                    "unlimited_stock": false,
                    "stock": 12,
                    "multi": false,
                    "desc": "Pulsa Telkomsel Rp 10.000"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client.price_list(&PriceListRequest::default()).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].buyer_sku_code, "tsel5");
    assert_eq!(items[0].product_type, "Umum");
    assert!(items[0].unlimited_stock);
    assert_eq!(items[1].buyer_sku_code, "tsel10");
    assert_eq!(items[1].stock, 12);
    assert!(!items[1].seller_product_status);
}

#[tokio::test]
async fn test_price_list_limit_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/price-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"rc": "83", "message": "Anda telah mencapai limitasi pengecekan pricelist"}
        })))
        .mount(&server)
        .await;

    let err = client.price_list(&PriceListRequest::pasca()).await.unwrap_err();
    assert_eq!(err.response_code(), Some(&ResponseCode::PriceListLimitReached));
}

#[tokio::test]
async fn test_top_up_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/transaction"))
        .and(body_partial_json(json!({
            "buyer_sku_code": "xld10",
            "customer_no": "087800001230",
            "ref_id": "order-1001",
            "testing": true,
            "username": USERNAME,
            "sign": sign("order-1001"),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "ref_id": "order-1001",
                "customer_no": "087800001230",
                "buyer_sku_code": "xld10",
                "message": "Transaksi Sukses",
                "status": "Sukses",
                "rc": "00",
                "sn": "1234567890",
                "buyer_last_saldo": 89750,
                "price": 10250,
                "tele": "@digiflazz",
                "wa": "081234567890"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tx = client
        .top_up(&TransactionRequest::new("xld10", "087800001230", "order-1001").testing(true))
        .await
        .unwrap();
    assert_eq!(tx.ref_id, "order-1001");
    assert_eq!(tx.rc, Some(ResponseCode::Success));
    assert_eq!(tx.sn, "1234567890");
    assert_eq!(tx.buyer_last_saldo, 89_750.0);
    assert_eq!(tx.price, 10_250.0);
}

#[tokio::test]
async fn test_business_error_on_http_200() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "ref_id": "order-1002",
                "message": "Saldo tidak cukup",
                "status": "Gagal",
                "rc": "44"
            }
        })))
        .mount(&server)
        .await;

    let err = client
        .top_up(&TransactionRequest::new("xld10", "087800001230", "order-1002"))
        .await
        .unwrap_err();

    match err {
        DigiflazzError::Api(api) => {
            assert_eq!(api.rc, ResponseCode::InsufficientBalance);
            assert_eq!(api.rc.as_str(), "44");
            assert_eq!(api.message, "Saldo tidak cukup");
            assert_eq!(api.status, "Gagal");
            assert!(!api.is_pending());
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_pending_top_up_keeps_transaction() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "ref_id": "order-1003",
                "customer_no": "087800001230",
                "buyer_sku_code": "xld10",
                "message": "Transaksi Pending",
                "status": "Pending",
                "rc": "03",
                "price": 10250
            }
        })))
        .mount(&server)
        .await;

    let err = client
        .top_up(&TransactionRequest::new("xld10", "087800001230", "order-1003"))
        .await
        .unwrap_err();
    let api = err.api_error().unwrap();
    assert!(api.is_pending());

    let tx: digiflazz::TransactionResponse = api.decode_payload().unwrap();
    assert_eq!(tx.ref_id, "order-1003");
    assert_eq!(tx.price, 10_250.0);
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/cek-saldo"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "data": {"deposit": 10}
        })))
        .mount(&server)
        .await;

    match client.check_balance().await.unwrap_err() {
        DigiflazzError::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("deposit"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/cek-saldo"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    match client.check_balance().await.unwrap_err() {
        DigiflazzError::Status { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_envelope_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/cek-saldo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deposit": 10})))
        .mount(&server)
        .await;

    let err = client.check_balance().await.unwrap_err();
    assert!(matches!(err, DigiflazzError::Decode { .. }));
}

#[tokio::test]
async fn test_postpaid_commands() {
    let (server, client) = setup().await;

    let bill = json!({
        "data": {
            "ref_id": "bill-77",
            "customer_no": "530000000001",
            "buyer_sku_code": "pln",
            "customer_name": "Nama Pelanggan Pertama",
            "admin": 2500,
            "message": "Transaksi Sukses",
            "status": "Sukses",
            "rc": "00",
            "price": 102500,
            "selling_price": 103000,
            "desc": {"tarif": "R1", "daya": 1300, "lembar_tagihan": "1"}
        }
    });

    for command in ["inq-pasca", "pay-pasca", "status-pasca"] {
        Mock::given(method("POST"))
            .and(path("/v1/transaction"))
            .and(body_partial_json(json!({
                "commands": command,
                "ref_id": "bill-77",
                "sign": sign("bill-77"),
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(bill.clone()))
            .expect(1)
            .mount(&server)
            .await;
    }

    let req = TransactionRequest::new("pln", "530000000001", "bill-77");

    let inquiry = client.inquiry_pasca(&req).await.unwrap();
    assert_eq!(inquiry.customer_name, "Nama Pelanggan Pertama");
    assert_eq!(inquiry.admin, 2500.0);
    assert_eq!(inquiry.transaction.ref_id, "bill-77");

    let paid = client.pay_pasca(&req).await.unwrap();
    assert_eq!(paid.selling_price, 103_000.0);

    let status = client.check_status(&req).await.unwrap();
    assert_eq!(status.status, "Sukses");
}

#[tokio::test]
async fn test_pln_inquiry_signs_with_customer_number() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/inquiry-pln"))
        .and(body_partial_json(json!({
            "customer_no": "12345678901",
            "sign": sign("12345678901"),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "message": "Transaksi Sukses",
                "status": "Sukses",
                "rc": "00",
                "customer_no": "12345678901",
                "meter_no": "45022133334",
                "subscriber_id": "523300817840",
                "name": "DAVID",
                "segment_power": "R1 /000001300"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pln = client
        .inquiry_pln(&PlnInquiryRequest::new("12345678901"))
        .await
        .unwrap();
    assert_eq!(pln.name, "DAVID");
    assert_eq!(pln.meter_no, "45022133334");
    assert_eq!(pln.segment_power, "R1 /000001300");
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    let client = DigiflazzClient::new(USERNAME, API_KEY).with_base_url("http://127.0.0.1:1/v1");
    let err = client.check_balance().await.unwrap_err();
    assert!(matches!(err, DigiflazzError::Http(_)));
}

#[tokio::test]
async fn test_client_shared_across_tasks() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/cek-saldo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"deposit": 500}
        })))
        .expect(8)
        .mount(&server)
        .await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.check_balance().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().deposit, 500.0);
    }
}
