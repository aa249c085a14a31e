//! Convenience result type alias for OnlineLibrary.

use crate::error::AppError;

/// A specialized `Result` type for library operations.
pub type AppResult<T> = Result<T, AppError>;
