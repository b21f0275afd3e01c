//! Convenience result type alias for RoomBook.

use crate::error::AppError;

/// A specialized `Result` type for RoomBook operations.
pub type AppResult<T> = Result<T, AppError>;
