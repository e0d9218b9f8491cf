//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use ledger_api::api::{self, AppState};
use ledger_api::db;
use ledger_api::service::TransactionService;
use ledger_api::store::{MemoryStore, PgAccountStore, PgOperationTypeStore, PgTransactionStore};
use serde_json::Value;
use sqlx::PgPool;
use tower::util::ServiceExt;

/// Application backed by a fresh in-memory store
pub fn memory_app() -> Router {
    api::build_app(AppState::new(TransactionService::in_memory(MemoryStore::new())))
}

/// Application backed by the given Postgres pool
pub fn postgres_app(pool: &PgPool) -> Router {
    let service = TransactionService::new(
        Arc::new(PgAccountStore::new(pool.clone())),
        Arc::new(PgTransactionStore::new(pool.clone())),
        Arc::new(PgOperationTypeStore::new(pool.clone())),
    );
    api::build_app(AppState::new(service))
}

/// Setup test database - migrate, truncate tables and reset identities
pub async fn setup_test_db() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let pool = db::connect(&database_url, 5)
        .await
        .expect("Failed to connect to DB");

    db::migrate(&pool).await.expect("Failed to run migrations");

    // Clean up DB for fresh state; operation types are seed data and stay
    sqlx::query("TRUNCATE TABLE transactions, accounts RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    pool
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|json| json.to_string());
    send_raw(app, method, uri, body.as_deref()).await
}

/// Send a request with a literal JSON body, keeping number text as written
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(text) => builder
            .header("content-type", "application/json")
            .body(Body::from(text.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
