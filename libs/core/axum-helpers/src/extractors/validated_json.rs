//! JSON extractor with automatic validation using the validator crate.

use crate::errors::ErrorResponse;
use crate::validation::translate_errors;
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, runs the `Validate` derive, and rejects
/// with a 400 carrying the translated field → message map when any
/// constraint fails.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(required, length(min = 3, max = 50))]
///     username: Option<String>,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) {
///     // payload passed every constraint
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ErrorResponse::new(rejection.status(), "Invalid request body")
                .with_message(rejection.body_text())
                .into_response()
        })?;

        data.validate().map_err(|errors| {
            ErrorResponse::new(StatusCode::BAD_REQUEST, "Validation failed")
                .with_details(translate_errors(&errors))
                .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
