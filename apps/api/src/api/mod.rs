use axum::Router;

pub mod health;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper, so the user
/// endpoints end up at `/api/v1/users`.
///
/// Takes a reference to AppState and initializes all services; the
/// returned Router is stateless (sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/v1/users", users::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
