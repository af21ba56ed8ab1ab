//! Shared helpers
//!
//! - [`AppError`] - application error type (from `shared::error`)
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - request payload checks

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
