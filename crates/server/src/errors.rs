use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// API error with a fixed message. The triggering cause is logged at the
/// call site and never echoed to the caller.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn internal(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}
