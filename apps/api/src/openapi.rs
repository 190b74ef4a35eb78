use utoipa::OpenApi;

/// Accounts API documentation, served at /swagger-ui with the raw
/// document at /api-docs/openapi.json.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        description = "User account management: registration, lookup, paginated listing"
    ),
    servers((url = "/api")),
    components(schemas(
        axum_helpers::errors::ErrorResponse,
        axum_helpers::pagination::PaginationMetadata,
        domain_users::models::User,
        domain_users::models::UserResponse,
        domain_users::models::CreateUserRequest,
        domain_auth::models::LoginRequest,
        domain_auth::models::RegisterRequest,
        domain_auth::models::AuthResponse,
        domain_auth::models::RefreshTokenRequest,
    )),
    tags(
        (name = "users", description = "User account operations"),
        (name = "auth", description = "Authentication flows (schemas only for now)")
    )
)]
pub struct ApiDoc;
