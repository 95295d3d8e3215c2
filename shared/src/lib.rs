//! Shared types for the grill service
//!
//! Domain entities with their request payloads and validation, the unified
//! error system, and the success response bodies.

pub mod error;
pub mod models;
pub mod response;
pub mod util;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
