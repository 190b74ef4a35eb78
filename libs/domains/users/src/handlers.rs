use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    ErrorResponse, IdPath, PaginatedResponse, PaginationMetadata, PaginationRequest,
    SuccessResponse, ValidatedJson,
};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUserRequest, UserResponse, to_response_list};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user))
        .with_state(shared_service)
}

/// Get a user by ID
///
/// GET /users/:id
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<SuccessResponse<UserResponse>>> {
    let user = service.get_user(id).await?;
    Ok(Json(SuccessResponse::new(user.into())))
}

/// List users with pagination
///
/// GET /users?page=1&page_size=10
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    pagination: Result<Query<PaginationRequest>, QueryRejection>,
) -> Result<Json<PaginatedResponse<UserResponse>>, Response> {
    let Query(pagination) = pagination.map_err(|rejection| {
        ErrorResponse::new(StatusCode::BAD_REQUEST, "Invalid pagination parameters")
            .with_message(rejection.body_text())
            .into_response()
    })?;

    let (users, total) = service
        .list_users(&pagination)
        .await
        .map_err(|e| e.into_response())?;

    Ok(Json(PaginatedResponse {
        data: to_response_list(users),
        pagination: PaginationMetadata::new(&pagination, total),
    }))
}

/// Create a new user
///
/// POST /users
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> UserResult<Json<SuccessResponse<UserResponse>>> {
    let user = service.create_user(input).await?;
    Ok(Json(
        SuccessResponse::new(user.into()).with_message("User created successfully"),
    ))
}
