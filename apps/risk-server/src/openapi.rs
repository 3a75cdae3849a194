//! `OpenAPI` documentation for the risks API.

use axum::{routing::get, Json, Router};
use risk_api::error::ErrorResponse;
use risk_api::models::{CreateRiskRequest, Risk, RiskState};
use utoipa::OpenApi;

/// Path the generated document is served from.
pub const OPENAPI_JSON_PATH: &str = "/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Risk Registry API",
        version = "0.1.0",
        description = "Create and read risk records"
    ),
    paths(
        risk_api::handlers::risks::create_risk_handler,
        risk_api::handlers::risks::list_risks_handler,
        risk_api::handlers::risks::get_risk_handler,
    ),
    components(schemas(Risk, RiskState, CreateRiskRequest, ErrorResponse)),
    tags(
        (name = "Risks", description = "Risk creation and retrieval")
    )
)]
pub struct ApiDoc;

/// Router serving the `OpenAPI` document as JSON.
pub fn openapi_routes() -> Router {
    Router::new().route(
        OPENAPI_JSON_PATH,
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
