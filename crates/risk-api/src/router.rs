//! Router configuration for the risks API.

use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::handlers::{create_risk_handler, get_risk_handler, list_risks_handler};
use crate::middleware::request_logging_middleware;
use crate::services::RiskStore;

/// Application state shared by the risks handlers.
#[derive(Clone)]
pub struct RiskAppState {
    /// Store holding every risk for the lifetime of the process.
    pub store: Arc<RiskStore>,
}

/// Create the risks router.
///
/// Provides:
/// - POST /v1/risks - Create a risk
/// - GET /v1/risks - List all risks
/// - GET /v1/risks/{id} - Get a risk by id
///
/// Every request passes through the access logging middleware.
pub fn risks_router(store: Arc<RiskStore>) -> Router {
    let state = RiskAppState { store };

    Router::new()
        .route("/v1/risks", get(list_risks_handler).post(create_risk_handler))
        .route("/v1/risks/{id}", get(get_risk_handler))
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}
