//! Standard response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Standard error body returned by every endpoint.
///
/// `details` carries the field → message map produced by
/// [`crate::validation::translate_errors`] when the failure is a
/// validation failure; it is omitted otherwise.
///
/// ```json
/// {
///   "status": 400,
///   "error": "Validation failed",
///   "details": { "password": "password must be at least 8 characters long" }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body for log scrapers
    pub status: u16,
    /// Short machine-stable error label
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: BTreeMap<String, String>) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Standard success body: `{data, message?}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(StatusCode::NOT_FOUND, "Route not found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization_skips_empty_fields() {
        let body = ErrorResponse::new(StatusCode::NOT_FOUND, "User not found");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "User not found");
        assert!(json.get("message").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let mut details = BTreeMap::new();
        details.insert("email".to_string(), "email is required".to_string());

        let body = ErrorResponse::new(StatusCode::BAD_REQUEST, "Validation failed")
            .with_details(details);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["details"]["email"], "email is required");
    }

    #[test]
    fn test_success_response_with_message() {
        let body = SuccessResponse::new(42).with_message("done");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["data"], 42);
        assert_eq!(json["message"], "done");
    }
}
