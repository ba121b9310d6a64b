//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Every failure surfaced over the API falls into one of these buckets:
/// invalid input, a missing resource, a conflicting write (duplicate key or
/// an already-decided workflow transition), or a storage failure. Each
/// variant carries the user-facing message verbatim; the variant itself
/// only selects the HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Validation error (bad input, insufficient stock, missing fields).
    #[error("{0}")]
    Validation(String),

    /// Conflict (duplicate entry, already-decided request).
    #[error("{0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound(String::new()), 404)]
    #[case(AppError::Validation(String::new()), 400)]
    #[case(AppError::Conflict(String::new()), 409)]
    #[case(AppError::Database(String::new()), 500)]
    #[case(AppError::Internal(String::new()), 500)]
    fn test_error_status_codes(#[case] err: AppError, #[case] status: u16) {
        assert_eq!(err.status_code(), status);
    }

    #[test]
    fn test_error_display_carries_message() {
        assert_eq!(
            AppError::NotFound("Product not found: 42".into()).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            AppError::Validation("Quantity must be positive".into()).to_string(),
            "Quantity must be positive"
        );
        assert_eq!(
            AppError::Database("connection reset".into()).to_string(),
            "Database error: connection reset"
        );
    }
}
