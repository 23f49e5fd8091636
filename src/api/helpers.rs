//! Response builders shared by the route handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::errors::RecapError;

/// Returns an error response with the given status code and `{ "error": message }` body.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message }))).into_response()
}

/// Wraps `RecapError` so handlers can return it with `?`. Only the public
/// message reaches the caller.
#[derive(Debug)]
pub struct ApiError(pub RecapError);

impl From<RecapError> for ApiError {
    fn from(error: RecapError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        err_response(self.0.status_code(), &self.0.public_message())
    }
}
