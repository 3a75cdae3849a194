//! Handlers for risk creation and retrieval.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::error::{RiskError, RiskResult};
use crate::models::{CreateRiskRequest, Risk};
use crate::router::RiskAppState;
use crate::services::validate_create_request;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Only the bare JSON media type is accepted, without parameters.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes() == JSON_MEDIA_TYPE.as_bytes())
}

/// POST /v1/risks
///
/// Create a new risk. The id is always generated by the server.
///
/// The content type is checked before the body is looked at, so a wrong
/// content type is answered with 415 whatever the body holds.
#[utoipa::path(
    post,
    path = "/v1/risks",
    request_body(content = CreateRiskRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Risk created", body = Risk),
        (status = 400, description = "Malformed JSON or validation error", body = crate::error::ErrorResponse),
        (status = 413, description = "Body exceeds the request body limit", body = crate::error::ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = crate::error::ErrorResponse),
    ),
    tag = "Risks"
)]
pub async fn create_risk_handler(
    State(state): State<RiskAppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> RiskResult<(StatusCode, Json<Risk>)> {
    if !has_json_content_type(&headers) {
        return Err(RiskError::UnsupportedMediaType);
    }

    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Failed to read risk payload");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RiskError::PayloadTooLarge
        } else {
            RiskError::InvalidPayload
        }
    })?;

    let request: CreateRiskRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode risk payload");
        RiskError::InvalidPayload
    })?;

    let new_risk = validate_create_request(&request)?;

    let risk = Risk::from_new(Uuid::new_v4().to_string(), new_risk);
    state.store.insert(risk.clone());

    tracing::info!(
        id = %risk.id,
        state = %risk.state,
        "Risk created successfully"
    );

    Ok((StatusCode::CREATED, Json(risk)))
}

/// GET /v1/risks
///
/// List every stored risk. Order is unspecified.
#[utoipa::path(
    get,
    path = "/v1/risks",
    responses(
        (status = 200, description = "All risks", body = [Risk]),
    ),
    tag = "Risks"
)]
pub async fn list_risks_handler(State(state): State<RiskAppState>) -> Json<Vec<Risk>> {
    let risks = state.store.list_all();

    tracing::info!(count = risks.len(), "All risks retrieved successfully");

    Json(risks)
}

/// GET /v1/risks/{id}
///
/// An id that cannot be decoded from the path cannot match a stored risk,
/// so it is reported as not found.
#[utoipa::path(
    get,
    path = "/v1/risks/{id}",
    params(
        ("id" = String, Path, description = "Risk ID")
    ),
    responses(
        (status = 200, description = "Risk found", body = Risk),
        (status = 404, description = "Risk not found", body = crate::error::ErrorResponse),
    ),
    tag = "Risks"
)]
pub async fn get_risk_handler(
    State(state): State<RiskAppState>,
    path: Result<Path<String>, PathRejection>,
) -> RiskResult<Json<Risk>> {
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable risk id in path");
        RiskError::NotFound
    })?;

    let risk = state.store.get_by_id(&id).ok_or(RiskError::NotFound)?;

    tracing::info!(id = %id, "Risk retrieved successfully");

    Ok(Json(risk))
}
