//! Shared types for the RentifyTech API
//!
//! Error codes, the unified error/response envelope, and the request and
//! response payloads exchanged with clients.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
