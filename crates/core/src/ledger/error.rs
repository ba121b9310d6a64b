//! Ledger error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while posting a stock movement.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Quantity must be a positive integer.
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(i32),

    /// A reason is required for every movement.
    #[error("A movement reason is required")]
    ReasonRequired,

    /// Not enough stock on hand to issue the requested quantity.
    #[error("Insufficient stock: {available} on hand, {requested} requested")]
    InsufficientStock {
        /// Quantity currently on hand.
        available: i32,
        /// Quantity the caller tried to issue.
        requested: i32,
    },

    /// The balance would exceed the representable range.
    #[error("Stock balance overflow")]
    BalanceOverflow,

    /// Referenced product does not exist.
    #[error("Product {0} not found")]
    ProductNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NonPositiveQuantity(_)
            | Self::ReasonRequired
            | Self::InsufficientStock { .. }
            | Self::BalanceOverflow => 400,
            Self::ProductNotFound(_) => 404,
            Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(LedgerError::NonPositiveQuantity(0).status_code(), 400);
        assert_eq!(LedgerError::ReasonRequired.status_code(), 400);
        assert_eq!(
            LedgerError::InsufficientStock {
                available: 3,
                requested: 10
            }
            .status_code(),
            400
        );
        assert_eq!(LedgerError::BalanceOverflow.status_code(), 400);
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(LedgerError::ProductNotFound(Uuid::nil()).status_code(), 404);
    }

    #[test]
    fn test_database_is_500() {
        assert_eq!(LedgerError::Database("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_insufficient_stock_message() {
        let err = LedgerError::InsufficientStock {
            available: 70,
            requested: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock: 70 on hand, 1000 requested"
        );
    }
}
