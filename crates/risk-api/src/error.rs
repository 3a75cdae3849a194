//! Error types for the risks API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::services::ValidationErrors;

/// Errors a risks handler can return to the client.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Create was called with a content type other than `application/json`.
    #[error("invalid content-type, expected application/json")]
    UnsupportedMediaType,

    /// Body is larger than the router's request body limit.
    #[error("request body too large")]
    PayloadTooLarge,

    /// Body could not be decoded into a risk payload.
    #[error("invalid JSON payload")]
    InvalidPayload,

    /// Payload decoded but failed one or more rules.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// No risk with the requested id.
    #[error("risk not found")]
    NotFound,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "risk not found")]
    pub error: String,
}

impl RiskError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RiskError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RiskError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RiskError::InvalidPayload | RiskError::Validation(_) => StatusCode::BAD_REQUEST,
            RiskError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for RiskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_response();

        tracing::error!(status_code = status.as_u16(), "{}", body.error);

        (status, Json(body)).into_response()
    }
}

/// Result type alias for risks handlers.
pub type RiskResult<T> = Result<T, RiskError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateRiskRequest;
    use crate::services::validate_create_request;
    use tracing_test::traced_test;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RiskError::UnsupportedMediaType.status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            RiskError::InvalidPayload.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RiskError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(RiskError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_carries_detail() {
        let errors = validate_create_request(&CreateRiskRequest::default()).unwrap_err();
        let error = RiskError::from(errors.clone());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_response().error, errors.to_string());
    }

    #[test]
    fn test_error_response_has_single_field() {
        let json = serde_json::to_value(RiskError::NotFound.to_response()).unwrap();
        assert_eq!(json, serde_json::json!({"error": "risk not found"}));
    }

    #[test]
    fn test_into_response_status() {
        let response = RiskError::UnsupportedMediaType.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    #[traced_test]
    fn test_into_response_logs_error_with_status_code() {
        let response = RiskError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        assert!(logs_contain("ERROR"));
        assert!(logs_contain("status_code=404"));
        assert!(logs_contain("risk not found"));
    }

    #[test]
    #[traced_test]
    fn test_validation_error_logged_with_detail() {
        let errors = validate_create_request(&CreateRiskRequest::default()).unwrap_err();
        let _ = RiskError::from(errors).into_response();

        assert!(logs_contain("status_code=400"));
        assert!(logs_contain("title is required"));
    }
}
