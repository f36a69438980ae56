//! Error Conversion
//!
//! Implements `IntoResponse` for `ApiError` so handlers can return it
//! directly. Responses are JSON:
//!
//! ```json
//! {
//!   "error": "message",
//!   "status": 400
//! }
//! ```
//!
//! Internal faults are logged with their full detail here, at the boundary,
//! and surfaced with an opaque message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Unexpected faults carry internal detail that must not reach the
        // caller; log it before discarding.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {:?}", self);
        }

        let body = Json(serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
