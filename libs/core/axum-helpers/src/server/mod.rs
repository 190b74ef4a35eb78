//! Server infrastructure module.
//!
//! Provides application startup with OpenAPI documentation, health and
//! readiness endpoints, and graceful shutdown on SIGINT/SIGTERM.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::shutdown_signal;
