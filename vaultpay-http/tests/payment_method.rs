//! Payment-method lifecycle tests against a mocked gateway.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vaultpay::params::{CreateRequest, PaymentMethodOptions, UpdateRequest};
use vaultpay::payment_method::PaymentMethod;
use vaultpay::verification::VerificationStatus;
use vaultpay::{AddressParams, codes, testing};
use vaultpay_http::{Environment, Gateway, GatewayConfig, GatewayError};

const MERCHANT: &str = "integration_merchant";
const PUBLIC_KEY: &str = "integration_public_key";
const PRIVATE_KEY: &str = "integration_private_key";

fn test_gateway(server: &MockServer) -> Gateway {
    Gateway::new(
        GatewayConfig::new(Environment::Sandbox, MERCHANT, PUBLIC_KEY, PRIVATE_KEY)
            .with_base_url(server.uri()),
    )
    .unwrap()
}

fn payment_methods_path() -> String {
    format!("/merchants/{MERCHANT}/payment_methods")
}

fn token_path(token: &str) -> String {
    format!("/merchants/{MERCHANT}/payment_methods/{token}")
}

fn visa_card_body(token: &str) -> serde_json::Value {
    json!({
        "creditCard": {
            "token": token,
            "bin": testing::bin(testing::VISA),
            "last4": testing::last4(testing::VISA),
            "cardType": "Visa",
            "expirationMonth": "11",
            "expirationYear": "2099",
            "customerId": "cust_42",
            "default": false,
            "imageUrl": "https://assets.vaultpay.io/cards/visa.png"
        }
    })
}

#[tokio::test]
async fn create_from_nonce_then_find_returns_matching_card() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(payment_methods_path()))
        .and(body_partial_json(json!({
            "paymentMethodNonce": "fake-valid-nonce",
            "customerId": "cust_42"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(visa_card_body("ch6byss")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(token_path("ch6byss")))
        .respond_with(ResponseTemplate::new(200).set_body_json(visa_card_body("ch6byss")))
        .mount(&server)
        .await;

    let gateway = test_gateway(&server);
    let result = gateway
        .payment_method()
        .create(&CreateRequest::new("fake-valid-nonce").with_customer_id("cust_42"))
        .await
        .unwrap();

    assert!(result.is_success());
    let created = result.payment_method().unwrap();
    let card = created.as_credit_card().unwrap();
    assert_eq!(card.bin, "411111");
    assert_eq!(card.last4, "1111");
    assert_eq!(card.expiration_date().unwrap(), "11/2099");
    assert!(created.image_url().is_some());

    let found = gateway.payment_method().find("ch6byss").await.unwrap();
    assert_eq!(found.token(), "ch6byss");
    assert_eq!(found.as_credit_card().unwrap().bin, card.bin);
    assert_eq!(found.as_credit_card().unwrap().last4, card.last4);
}

#[tokio::test]
async fn create_returns_a_paypal_account_for_paypal_nonces() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(payment_methods_path()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "paypalAccount": {
                "token": "PAYPAL_TOKEN-77",
                "email": "jane.doe@example.com",
                "customerId": "cust_42"
            }
        })))
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .create(
            &CreateRequest::new("fake-paypal-future-nonce")
                .with_customer_id("cust_42")
                .with_token("PAYPAL_TOKEN-77"),
        )
        .await
        .unwrap();

    let account = result
        .payment_method()
        .unwrap()
        .as_paypal_account()
        .unwrap();
    assert_eq!(account.email, "jane.doe@example.com");
    assert_eq!(account.token, "PAYPAL_TOKEN-77");
}

#[tokio::test]
async fn create_sends_the_make_default_option() {
    let server = MockServer::start().await;

    let mut body = visa_card_body("new_default");
    body["creditCard"]["default"] = json!(true);

    Mock::given(method("POST"))
        .and(path(payment_methods_path()))
        .and(body_partial_json(json!({
            "options": { "makeDefault": true }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .create(
            &CreateRequest::new("fake-valid-nonce")
                .with_customer_id("cust_42")
                .with_options(PaymentMethodOptions::new().make_default()),
        )
        .await
        .unwrap();

    assert!(result.payment_method().unwrap().is_default());
}

#[tokio::test]
async fn one_time_paypal_nonce_fails_vaulting_with_stable_codes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(payment_methods_path()))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "apiErrorResponse": {
                "message": "Cannot vault a one-time use PayPal account.",
                "errors": {
                    "paypalAccount": {
                        "errors": [
                            {
                                "code": "82902",
                                "attribute": "base",
                                "message": "Cannot vault a one-time use PayPal account."
                            },
                            {
                                "code": "82901",
                                "attribute": "base",
                                "message": "Consent code or access token is required."
                            }
                        ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .create(&CreateRequest::new("fake-paypal-one-time-nonce").with_customer_id("cust_42"))
        .await
        .unwrap();

    assert!(!result.is_success());
    let errors = result.errors().unwrap().for_key("paypalAccount").unwrap();
    assert_eq!(
        errors.errors()[0].code,
        codes::PAYPAL_CANNOT_VAULT_ONE_TIME_USE_ACCOUNT
    );
    assert_eq!(
        errors.errors()[1].code,
        codes::PAYPAL_CONSENT_CODE_OR_ACCESS_TOKEN_IS_REQUIRED
    );
}

#[tokio::test]
async fn update_replaces_the_billing_address_by_default() {
    let server = MockServer::start().await;

    let mut body = visa_card_body("card_addr");
    body["creditCard"]["billingAddress"] = json!({ "id": "addr_new", "region": "IL" });

    // No updateExisting flag in the request body.
    Mock::given(method("PUT"))
        .and(path(token_path("card_addr")))
        .and(body_partial_json(json!({
            "billingAddress": { "region": "IL" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .update(
            "card_addr",
            &UpdateRequest::new().with_billing_address(AddressParams::new().with_region("IL")),
        )
        .await
        .unwrap();

    let card = result.payment_method().unwrap().as_credit_card().unwrap();
    assert_eq!(card.billing_address.as_ref().unwrap().id, "addr_new");
}

#[tokio::test]
async fn update_existing_keeps_the_billing_address_id() {
    let server = MockServer::start().await;

    let mut body = visa_card_body("card_addr");
    body["creditCard"]["billingAddress"] = json!({
        "id": "addr_original",
        "region": "IL",
        "streetAddress": "123 Nigeria Ave"
    });

    Mock::given(method("PUT"))
        .and(path(token_path("card_addr")))
        .and(body_partial_json(json!({
            "billingAddress": {
                "region": "IL",
                "options": { "updateExisting": true }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .update(
            "card_addr",
            &UpdateRequest::new().with_billing_address(
                AddressParams::new().with_region("IL").update_existing(),
            ),
        )
        .await
        .unwrap();

    let card = result.payment_method().unwrap().as_credit_card().unwrap();
    let address = card.billing_address.as_ref().unwrap();
    assert_eq!(address.id, "addr_original");
    assert_eq!(address.street_address.as_deref(), Some("123 Nigeria Ave"));
}

#[tokio::test]
async fn update_token_conflict_fails_with_92906() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(token_path("first_token")))
        .and(body_partial_json(json!({ "token": "second_token" })))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "apiErrorResponse": {
                "message": "Token is in use.",
                "errors": {
                    "paypalAccount": {
                        "errors": [
                            { "code": "92906", "attribute": "token", "message": "Token is in use." }
                        ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .update("first_token", &UpdateRequest::new().with_token("second_token"))
        .await
        .unwrap();

    assert!(!result.is_success());
    let all = result.errors().unwrap().deep_all();
    assert_eq!(all[0].code, codes::PAYMENT_METHOD_TOKEN_IS_IN_USE);
}

#[tokio::test]
async fn declined_reverification_is_attached_to_the_failure() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(token_path("verified_card")))
        .and(body_partial_json(json!({
            "options": { "verifyCard": true }
        })))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "apiErrorResponse": {
                "message": "Card verification failed.",
                "errors": { "errors": [] },
                "verification": {
                    "status": "processor_declined",
                    "processorResponseCode": "2000",
                    "processorResponseText": "Do Not Honor"
                }
            }
        })))
        .mount(&server)
        .await;

    let result = test_gateway(&server)
        .payment_method()
        .update(
            "verified_card",
            &UpdateRequest::new()
                .with_number(testing::MASTERCARD_FAILS_VERIFICATION)
                .with_expiration_date("06/2033")
                .with_options(PaymentMethodOptions::new().verify_card()),
        )
        .await
        .unwrap();

    assert!(!result.is_success());
    let verification = result.verification().unwrap();
    assert_eq!(verification.status, VerificationStatus::ProcessorDeclined);
    assert!(verification.gateway_rejection_reason.is_none());
}

#[tokio::test]
async fn delete_then_find_fails_with_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(token_path("doomed_token")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(token_path("doomed_token")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = test_gateway(&server);
    gateway.payment_method().delete("doomed_token").await.unwrap();

    let error = gateway
        .payment_method()
        .find("doomed_token")
        .await
        .unwrap_err();
    assert!(error.is_not_found());
    assert!(error.to_string().contains("doomed_token"));
}

#[tokio::test]
async fn requests_carry_basic_auth_credentials() {
    let server = MockServer::start().await;

    let expected = format!(
        "Basic {}",
        BASE64.encode(format!("{PUBLIC_KEY}:{PRIVATE_KEY}"))
    );

    Mock::given(method("GET"))
        .and(path(token_path("authed")))
        .and(header("authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(visa_card_body("authed")))
        .expect(1)
        .mount(&server)
        .await;

    let found: PaymentMethod = test_gateway(&server)
        .payment_method()
        .find("authed")
        .await
        .unwrap();
    assert_eq!(found.token(), "authed");
}

#[tokio::test]
async fn bad_credentials_fail_hard() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(token_path("any")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = test_gateway(&server)
        .payment_method()
        .find("any")
        .await
        .unwrap_err();
    assert!(matches!(error, GatewayError::AuthenticationFailed));
}

#[tokio::test]
async fn gateway_outages_surface_the_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(payment_methods_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = test_gateway(&server)
        .payment_method()
        .create(&CreateRequest::new("nonce"))
        .await
        .unwrap_err();
    assert!(matches!(error, GatewayError::ServerError { status } if status.as_u16() == 503));
}
