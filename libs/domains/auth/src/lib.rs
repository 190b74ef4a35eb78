//! Auth Domain
//!
//! Request and response schemas for authentication flows. The token
//! issuing service is not wired up yet; these DTOs define the contract
//! the endpoints will bind against.

pub mod models;

pub use models::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};
