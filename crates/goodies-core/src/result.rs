//! Convenience result type alias for Goodies.

use crate::error::AppError;

/// A specialized `Result` type for Goodies operations.
pub type AppResult<T> = Result<T, AppError>;
