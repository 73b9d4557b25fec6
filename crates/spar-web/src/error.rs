//! API error types and handling.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use spar_core::EstimateError;
use thiserror::Error;

/// Errors surfaced by the HTTP adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Estimate(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Estimate(EstimateError::DateOutOfRange { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Estimate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Estimate(EstimateError::InvalidParameter { .. }) => "invalid_parameter",
            ApiError::Estimate(EstimateError::InvalidModel(_)) => "invalid_model",
            ApiError::Estimate(EstimateError::DateOutOfRange { .. }) => "date_out_of_range",
            ApiError::Estimate(_) => "internal",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let payload = json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        (status, Json(payload)).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
