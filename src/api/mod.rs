//! API module
//!
//! HTTP API endpoints, extractors and middleware.

pub mod extract;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::service::TransactionService;

pub use routes::create_router;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TransactionService>,
}

impl AppState {
    pub fn new(service: TransactionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the application: routes, middleware and state
pub fn build_app(state: AppState) -> Router {
    // Last layer added runs first: cors -> request id -> trace -> context -> logging -> handler
    create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
