/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError` so handlers can return it directly, and
 * `From` conversions for the rejections axum produces before a handler runs.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Email not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        SharedError::malformed("Request body must be valid JSON with the expected fields").into()
    }
}
