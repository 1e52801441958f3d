use super::models::responses::{ErrorDetails, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

/// 200 with `data` as the JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Error envelope: `{"error": {"code", "message", "details", "timestamp"}}`
pub fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<String>,
) -> Response {
    let body = ErrorResponse {
        error: ErrorDetails {
            code: code.to_string(),
            message: message.to_string(),
            details,
            timestamp: Utc::now(),
        },
    };
    (status, Json(body)).into_response()
}
