use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

/// Domain error taxonomy for user operations.
///
/// Variants carry no payload; the boundary layer maps each kind to a
/// status code and a fixed user-facing message, never raw storage error
/// text. Storage failures are logged at the site that observed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("User account is inactive")]
    Inactive,

    #[error("Username already exists")]
    UsernameConflict,

    #[error("Validation failed")]
    Validation,

    #[error("An internal error occurred")]
    Internal,
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type) = match self {
            UserError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            UserError::Inactive => (StatusCode::FORBIDDEN, "inactive"),
            UserError::UsernameConflict => (StatusCode::CONFLICT, "conflict"),
            UserError::Validation => (StatusCode::BAD_REQUEST, "validation_error"),
            UserError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        ErrorResponse::new(status, error_type)
            .with_message(self.to_string())
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        let cases = [
            (UserError::NotFound, StatusCode::NOT_FOUND),
            (UserError::Inactive, StatusCode::FORBIDDEN),
            (UserError::UsernameConflict, StatusCode::CONFLICT),
            (UserError::Validation, StatusCode::BAD_REQUEST),
            (UserError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
