//! # Axum Helpers
//!
//! Shared plumbing for building the HTTP APIs in this workspace.
//!
//! ## Modules
//!
//! - **[`pagination`]**: page/page-size sanitization and response metadata
//! - **[`validation`]**: translation of validator failures into field → message maps
//! - **[`extractors`]**: custom extractors (numeric id path, validated JSON)
//! - **[`errors`]**: the standard `{status, error, message?, details?}` envelope
//! - **[`server`]**: server startup, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod pagination;
pub mod server;
pub mod validation;

// Re-export the types handlers reach for most often
pub use errors::{not_found, ErrorResponse, SuccessResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use pagination::{PaginatedResponse, PaginationMetadata, PaginationRequest};
pub use server::{
    create_app, create_router, health_router, run_health_checks, shutdown_signal, HealthResponse,
};
pub use validation::{to_snake_case, translate_errors};
