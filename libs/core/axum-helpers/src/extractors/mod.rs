//! Custom extractors for Axum handlers.
//!
//! These standardize rejection bodies so transport-level failures use the
//! same envelope as domain errors.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
