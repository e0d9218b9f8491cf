//! API Integration Tests against the in-memory backend

use axum::http::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;

use ledger_api::api::routes::{CreateAccountRequest, CreateTransactionRequest};

mod common;

#[tokio::test]
async fn test_health() {
    let app = common::memory_app();

    let (status, json) = common::send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_create_and_get_account() {
    let app = common::memory_app();

    let request = CreateAccountRequest {
        document_number: "12345678".to_string(),
    };
    let (status, created) =
        common::send(&app, "POST", "/accounts", Some(serde_json::to_value(&request).unwrap())).await;
    assert_eq!(status, StatusCode::CREATED, "Account creation failed: {}", created);
    assert_eq!(created["id"], 1);
    assert_eq!(created["document_number"], "12345678");

    let (status, fetched) = common::send(&app, "GET", "/accounts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["document_number"], "12345678");
}

#[tokio::test]
async fn test_get_missing_account() {
    let app = common::memory_app();

    let (status, json) = common::send(&app, "GET", "/accounts/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], 404);
    assert_eq!(json["error"]["code"], "account_not_found");
}

#[tokio::test]
async fn test_get_account_with_non_integer_id() {
    let app = common::memory_app();

    let (status, json) = common::send(&app, "GET", "/accounts/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "cannot parse ID, should be integer");
}

#[tokio::test]
async fn test_create_account_validation() {
    let app = common::memory_app();

    let (status, json) =
        common::send(&app, "POST", "/accounts", Some(json!({ "document_number": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "document_number: must not be empty");

    let (status, json) = common::send(&app, "POST", "/accounts", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");

    let (status, _) = common::send(
        &app,
        "POST",
        "/accounts",
        Some(json!({ "document_number": "9".repeat(256) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transaction_sign_follows_operation_type() {
    let app = common::memory_app();
    common::send(&app, "POST", "/accounts", Some(json!({ "document_number": "12345678" }))).await;

    // Debit operation with a positive amount
    let (status, debit) = common::send_raw(
        &app,
        "POST",
        "/transactions",
        Some(r#"{"account_id": 1, "operation_type_id": 1, "amount": 100.50}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Debit failed: {}", debit);
    assert_eq!(debit["amount"], "-100.50");
    assert_eq!(debit["status"], "completed");
    assert_eq!(debit["account_id"], 1);
    assert_eq!(debit["operation_type_id"], 1);

    // Credit operation with a negative amount
    let (status, credit) = common::send_raw(
        &app,
        "POST",
        "/transactions",
        Some(r#"{"account_id": 1, "operation_type_id": 4, "amount": -100.50}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Credit failed: {}", credit);
    assert_eq!(credit["amount"], "100.50");

    // Decimal string input
    let request = CreateTransactionRequest {
        account_id: 1,
        operation_type_id: 3,
        amount: dec!(-42.000),
    };
    let (status, withdrawal) = common::send(
        &app,
        "POST",
        "/transactions",
        Some(serde_json::to_value(&request).unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Withdrawal failed: {}", withdrawal);
    assert_eq!(withdrawal["amount"], "-42.000");
}

#[tokio::test]
async fn test_amount_keeps_digits_beyond_f64() {
    let app = common::memory_app();
    common::send(&app, "POST", "/accounts", Some(json!({ "document_number": "12345678" }))).await;

    let (status, credit) = common::send_raw(
        &app,
        "POST",
        "/transactions",
        Some(r#"{"account_id": 1, "operation_type_id": 4, "amount": 12345678901234567.89}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Credit failed: {}", credit);
    assert_eq!(credit["amount"], "12345678901234567.89");

    let (status, debit) = common::send_raw(
        &app,
        "POST",
        "/transactions",
        Some(r#"{"account_id": 1, "operation_type_id": 2, "amount": "0.000000000000000001"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Debit failed: {}", debit);
    assert_eq!(debit["amount"], "-0.000000000000000001");
}

#[tokio::test]
async fn test_unknown_operation_type_is_bad_request() {
    let app = common::memory_app();
    common::send(&app, "POST", "/accounts", Some(json!({ "document_number": "12345678" }))).await;

    let (status, json) = common::send(
        &app,
        "POST",
        "/transactions",
        Some(json!({ "account_id": 1, "operation_type_id": 999, "amount": 100.50 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "operation_type_not_found");
}

#[tokio::test]
async fn test_unknown_account_is_bad_request() {
    let app = common::memory_app();

    let (status, json) = common::send(
        &app,
        "POST",
        "/transactions",
        Some(json!({ "account_id": 7, "operation_type_id": 1, "amount": "10" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "foreign_key_violation");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Foreign key constraint failed: "));
}

#[tokio::test]
async fn test_create_transaction_validation() {
    let app = common::memory_app();

    let (status, json) = common::send(
        &app,
        "POST",
        "/transactions",
        Some(json!({ "account_id": 1, "operation_type_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "missing amount: {}", json);

    let (status, _) = common::send(
        &app,
        "POST",
        "/transactions",
        Some(json!({ "account_id": "one", "operation_type_id": 1, "amount": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = common::send(
        &app,
        "POST",
        "/transactions",
        Some(json!({ "account_id": 0, "operation_type_id": 1, "amount": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "account_id: is required");
}

#[tokio::test]
async fn test_list_transactions_in_insertion_order() {
    let app = common::memory_app();

    let (status, json) = common::send(&app, "GET", "/transactions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    common::send(&app, "POST", "/accounts", Some(json!({ "document_number": "12345678" }))).await;
    for operation_type_id in [4, 1] {
        let (status, _) = common::send(
            &app,
            "POST",
            "/transactions",
            Some(json!({ "account_id": 1, "operation_type_id": operation_type_id, "amount": "25.00" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = common::send(&app, "GET", "/transactions", None).await;
    assert_eq!(status, StatusCode::OK);

    let transactions = json.as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["id"], 1);
    assert_eq!(transactions[0]["operation_type_id"], 4);
    assert_eq!(transactions[0]["amount"], "25.00");
    assert_eq!(transactions[1]["id"], 2);
    assert_eq!(transactions[1]["amount"], "-25.00");
}
