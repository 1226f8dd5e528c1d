//! HTTP error type for the flowdag server.
//!
//! Every error renders as a JSON `{"error": …}` body with the matching
//! status code, so the browser editor always receives a parseable
//! response.
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// All error conditions the HTTP layer can produce.
///
/// The analysis core itself is infallible; everything here is a boundary
/// concern.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The request body did not deserialize into a pipeline.
    #[error("invalid pipeline body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Propagate axum's status distinction: 400 for syntax errors,
            // 415 for a missing JSON content type, 422 for shape mismatches.
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
