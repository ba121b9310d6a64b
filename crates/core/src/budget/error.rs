//! Budget-request error types.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur for budget-request operations.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// A requester name is required.
    #[error("A requester name is required")]
    RequesterRequired,

    /// An account code is required.
    #[error("An account code is required")]
    AccountCodeRequired,

    /// The requested amount must be positive.
    #[error("Requested amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Referenced budget request does not exist.
    #[error("Budget request {0} not found")]
    NotFound(Uuid),

    /// Only pending requests may be deleted.
    #[error("Only pending requests can be deleted")]
    OnlyPendingDeletable,

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl BudgetError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::RequesterRequired | Self::AccountCodeRequired | Self::NonPositiveAmount(_) => 400,
            Self::NotFound(_) => 404,
            Self::OnlyPendingDeletable => 409,
            Self::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BudgetError::RequesterRequired.status_code(), 400);
        assert_eq!(BudgetError::AccountCodeRequired.status_code(), 400);
        assert_eq!(
            BudgetError::NonPositiveAmount(Decimal::ZERO).status_code(),
            400
        );
        assert_eq!(BudgetError::NotFound(Uuid::nil()).status_code(), 404);
        assert_eq!(BudgetError::OnlyPendingDeletable.status_code(), 409);
        assert_eq!(BudgetError::Database(String::new()).status_code(), 500);
    }
}
