//! Shared primitives for all Rust crates in Tollgate.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Tollgate crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration or malformed transport value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage backend unreachable or query failure.
    #[error("internal error: {0}")]
    Internal(String),
}
