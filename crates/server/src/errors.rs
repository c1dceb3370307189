use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Handler-boundary error: HTTP status plus a JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn invalid_type() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid organization type")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Organization not found")
    }

    pub fn save_failed(action: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to {action} organization"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

/// Map service failures onto the wire contract. Validation errors are
/// client mistakes; storage failures are server errors.
pub fn from_service(err: ServiceError, action: &str) -> ApiError {
    match err {
        ServiceError::Validation(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
        ServiceError::NotFound(_) => ApiError::not_found(),
        ServiceError::Storage(_) => ApiError::save_failed(action),
        ServiceError::Model(e) => ApiError::new(StatusCode::BAD_REQUEST, e.to_string()),
    }
}
