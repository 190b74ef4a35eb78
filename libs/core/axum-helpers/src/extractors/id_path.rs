//! Numeric id path parameter extractor.

use crate::errors::ErrorResponse;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Extractor for numeric surrogate-key path parameters.
///
/// Parses the single path segment as `i64`, rejecting with a 400 and the
/// standard error body when it is not a valid integer.
///
/// # Example
/// ```ignore
/// use axum_helpers::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {id}")
/// }
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(ErrorResponse::new(StatusCode::BAD_REQUEST, "Invalid user ID")
                .with_message(format!("'{raw}' is not a valid numeric id"))
                .into_response()),
        }
    }
}
