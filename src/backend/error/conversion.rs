/**
 * Error Conversion
 *
 * Conversions into and out of `BackendError`.
 *
 * # HTTP Response Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it
 * directly. Server-side failures are logged here, at the handler boundary,
 * before the generic body is sent.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Validation failed",
 *   "status": 400,
 *   "errors": [{ "field": "email", "message": "Please include a valid email" }]
 * }
 * ```
 * `errors` is only present for validation failures.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::backend::error::types::BackendError;
use crate::shared::PostError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }

        let mut body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        let field_errors = self.field_errors();
        if !field_errors.is_empty() {
            body["errors"] = serde_json::json!(field_errors);
        }

        (status, Json(body)).into_response()
    }
}

impl From<PostError> for BackendError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::AlreadyLiked | PostError::NotLiked => {
                BackendError::handler(StatusCode::BAD_REQUEST, err.to_string())
            }
            PostError::CommentNotFound => BackendError::not_found(err.to_string()),
            PostError::NotAuthorized => BackendError::forbidden(err.to_string()),
        }
    }
}
