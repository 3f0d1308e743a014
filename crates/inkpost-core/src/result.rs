//! Convenience result type alias for Inkpost.

use crate::error::AppError;

/// A specialized `Result` type for Inkpost operations.
pub type AppResult<T> = Result<T, AppError>;
