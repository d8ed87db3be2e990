//! End-to-end tests against a local HTTP server, exercising the real
//! reqwest transport instead of the in-crate mock.

use mollie_rs::services::orders::CreateShipment;
use mollie_rs::services::payments::{CreatePayment, ListPaymentsOptions, PaymentOptions};
use mollie_rs::types::Amount;
use mollie_rs::{Client, Config, MollieError};
use wiremock::matchers::{body_partial_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, config: Config) -> Client {
    Client::builder(config)
        .base_url(format!("{}/", server.uri()))
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn get_payment_with_include() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/payments/tr_WDqYK6vllg"))
        .and(query_param("include", "details.qrCode"))
        .and(header("Authorization", "Bearer test_abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("RateLimit-Remaining", "299")
                .set_body_raw(
                    r#"{"resource":"payment","id":"tr_WDqYK6vllg","status":"open",
                "amount":{"currency":"EUR","value":"10.00"}}"#,
                    "application/hal+json",
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Config::live("test_abc"));
    let options = PaymentOptions {
        include: vec!["details.qrCode".to_string()],
        ..Default::default()
    };
    let payment = client
        .payments
        .get("tr_WDqYK6vllg", Some(options))
        .await
        .expect("payment should decode");

    assert_eq!(payment.id, "tr_WDqYK6vllg");
    assert_eq!(payment.amount, Some(Amount::new("EUR", "10.00")));
    assert_eq!(
        payment.response.headers.get("RateLimit-Remaining").unwrap(),
        "299"
    );
}

#[tokio::test]
async fn create_payment_sends_idempotency_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/payments"))
        .and(header("Content-Type", "application/json"))
        .and(header_exists("Idempotency-Key"))
        .and(body_partial_json(serde_json::json!({
            "amount": {"currency": "EUR", "value": "10.00"},
            "description": "Order #12345"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{"resource":"payment","id":"tr_new","status":"open"}"#,
            "application/hal+json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Config::live("test_abc"));
    let payment = client
        .payments
        .create(CreatePayment {
            amount: Some(Amount::new("EUR", "10.00")),
            description: Some("Order #12345".to_string()),
            redirect_url: Some("https://example.org/return".to_string()),
            ..Default::default()
        })
        .await
        .expect("create should succeed");

    assert_eq!(payment.id, "tr_new");
}

#[tokio::test]
async fn list_chargebacks_extracts_next_cursor() {
    let server = MockServer::start().await;
    let body = format!(
        r#"{{"count":1,
            "_embedded":{{"chargebacks":[{{"resource":"chargeback","id":"chb_n9z0tp"}}]}},
            "_links":{{
                "self":{{"href":"{0}/v2/chargebacks","type":"application/hal+json"}},
                "next":{{"href":"{0}/v2/chargebacks?from=chb_xyz&limit=50","type":"application/hal+json"}}
            }}}}"#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/v2/chargebacks"))
        .and(query_param("profileId", "pfl_QkEhN94Ba"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/hal+json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Config::live("test_abc"));
    let options = mollie_rs::services::chargebacks::ChargebackOptions {
        profile_id: Some("pfl_QkEhN94Ba".to_string()),
        ..Default::default()
    };
    let list = client
        .chargebacks
        .list(Some(options))
        .await
        .expect("list should decode");

    assert_eq!(list.count as usize, list.embedded.chargebacks.len());
    assert_eq!(
        list.links.next_cursor().expect("next link should parse"),
        Some("chb_xyz".to_string())
    );
}

#[tokio::test]
async fn shipment_testmode_follows_credential_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders/ord_kEn1PlbGa/shipments"))
        .and(body_partial_json(serde_json::json!({"testmode": true})))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{"resource":"shipment","id":"shp_3wmsgCJN4U","orderId":"ord_kEn1PlbGa"}"#,
            "application/hal+json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    // Access token in testing mode injects testmode into the body.
    let client = client_for(&server, Config::test("access_test_xyz"));
    let shipment = client
        .orders
        .create_shipment("ord_kEn1PlbGa", CreateShipment::default())
        .await
        .expect("shipment should be created");
    assert_eq!(shipment.order_id.as_deref(), Some("ord_kEn1PlbGa"));

    // An API key in the same mode does not; the key itself encodes test/live.
    let server_plain = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders/ord_kEn1PlbGa/shipments"))
        .and(body_partial_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{"resource":"shipment","id":"shp_3wmsgCJN4U"}"#,
            "application/hal+json",
        ))
        .expect(1)
        .mount(&server_plain)
        .await;

    let client = client_for(&server_plain, Config::test("test_abc"));
    client
        .orders
        .create_shipment("ord_kEn1PlbGa", CreateShipment::default())
        .await
        .expect("shipment should be created");

    let received = server_plain.received_requests().await.expect("requests recorded");
    let body: serde_json::Value =
        serde_json::from_slice(&received[0].body).expect("body should be JSON");
    assert!(body.get("testmode").is_none());
}

#[tokio::test]
async fn unprocessable_entity_decodes_structured_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/payments"))
        .respond_with(ResponseTemplate::new(422).set_body_raw(
            r#"{"status":422,"title":"Unprocessable Entity","detail":"bad","field":"amount"}"#,
            "application/hal+json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server, Config::live("test_abc"));
    let err = client
        .payments
        .create(CreatePayment::default())
        .await
        .expect_err("422 should surface as an error");

    assert_eq!(
        err.to_string(),
        "422 Unprocessable Entity: bad, affected field: amount"
    );
    let api_error = err.api_error().expect("structured error should be present");
    assert_eq!(api_error.status, 422);
    assert_eq!(api_error.field.as_deref(), Some("amount"));
    // The full response stays inspectable alongside the decoded error.
    let response = err.response().expect("response wrapper should be kept");
    assert_eq!(response.status.as_u16(), 422);
}

#[tokio::test]
async fn bad_base_url_fails_without_io() {
    // No server is started; a request against this base URL must fail during
    // URL composition, before any connection attempt.
    let client = Client::builder(Config::live("test_abc"))
        .base_url("http://localhost")
        .build()
        .expect("client should build");

    let err = client
        .payments
        .get("tr_WDqYK6vllg", None)
        .await
        .expect_err("missing trailing slash should be rejected");
    assert!(matches!(err, MollieError::BadBaseUrl { .. }));
}

#[tokio::test]
async fn list_payments_pages_through_cursor() {
    let server = MockServer::start().await;
    let first = format!(
        r#"{{"count":1,
            "_embedded":{{"payments":[{{"resource":"payment","id":"tr_first"}}]}},
            "_links":{{
                "self":{{"href":"{0}/v2/payments","type":"application/hal+json"}},
                "next":{{"href":"{0}/v2/payments?from=tr_second","type":"application/hal+json"}}
            }}}}"#,
        server.uri()
    );
    let second = format!(
        r#"{{"count":1,
            "_embedded":{{"payments":[{{"resource":"payment","id":"tr_second"}}]}},
            "_links":{{
                "self":{{"href":"{0}/v2/payments?from=tr_second","type":"application/hal+json"}}
            }}}}"#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/v2/payments"))
        .and(query_param("from", "tr_second"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(second, "application/hal+json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(first, "application/hal+json"))
        .mount(&server)
        .await;

    let client = client_for(&server, Config::live("test_abc"));
    let page = client.payments.list(None).await.expect("first page");
    let cursor = page
        .links
        .next_cursor()
        .expect("next link should parse")
        .expect("next cursor should exist");
    assert_eq!(cursor, "tr_second");

    let next_page = client
        .payments
        .list(Some(ListPaymentsOptions {
            from: Some(cursor),
            ..Default::default()
        }))
        .await
        .expect("second page");
    assert_eq!(next_page.embedded.payments[0].id, "tr_second");
    assert!(next_page.links.next_cursor().expect("parse").is_none());
}
