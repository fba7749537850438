//! Error handling for the fieldcraft HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// Application error types that map to HTTP responses.
///
/// The taxonomy is deliberately small: malformed input becomes a 400
/// before any store call, and everything else (store rejections included)
/// surfaces as a 500 carrying the underlying failure description.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest { message: String, code: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            code: "bad_request".to_string(),
        }
    }

    /// Create an internal error from a plain message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let timestamp = OffsetDateTime::now_utc().to_string();

        let (status, error_code, message) = match self {
            AppError::BadRequest { message, code } => (StatusCode::BAD_REQUEST, code, message),
            // Store failure descriptions are part of the contract and are
            // not redacted, even outside debug builds.
            AppError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error".to_string(),
                e.to_string(),
            ),
        };

        tracing::error!(
            error_id = %error_id,
            error_code = %error_code,
            status_code = %status.as_u16(),
            "Request error"
        );

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message,
                "trace_id": error_id.to_string(),
                "timestamp": timestamp
            }
        });

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn bad_request_constructor_sets_code() {
        let error = AppError::bad_request("Invalid video data");

        match error {
            AppError::BadRequest { message, code } => {
                assert_eq!(message, "Invalid video data");
                assert_eq!(code, "bad_request");
            }
            _ => panic!("Expected BadRequest error"),
        }
    }

    #[test]
    fn bad_request_maps_to_400() {
        let error = AppError::bad_request("Invalid suggestion ID");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let error = AppError::internal("Failed to fetch videos: connection refused");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_error_keeps_underlying_description() {
        let error = AppError::internal("Failed to insert video: permission denied");
        match error {
            AppError::Internal(e) => {
                assert!(e.to_string().contains("permission denied"));
            }
            _ => panic!("Expected Internal error"),
        }
    }
}
