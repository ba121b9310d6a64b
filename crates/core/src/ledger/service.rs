//! Ledger service for movement validation and balance arithmetic.
//!
//! This module holds the pure rules of the stock ledger. The repository
//! layer locks the product row, calls into this service, and persists the
//! outcome; the rules themselves never touch the database.

use super::error::LedgerError;
use super::types::{MovementDraft, MovementType};

/// Ledger service for movement validation and balance arithmetic.
///
/// Stateless. The invariant it protects: a product's balance equals the
/// net sum of its movements, and never goes negative.
pub struct LedgerService;

impl LedgerService {
    /// Validates a movement draft before any write happens.
    ///
    /// Checks that the quantity is positive and a reason is given.
    /// Stock sufficiency is checked in [`Self::apply`], against the balance
    /// read under the row lock.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the draft is invalid.
    pub fn validate(draft: &MovementDraft) -> Result<(), LedgerError> {
        if draft.quantity <= 0 {
            return Err(LedgerError::NonPositiveQuantity(draft.quantity));
        }
        if draft.reason.trim().is_empty() {
            return Err(LedgerError::ReasonRequired);
        }
        Ok(())
    }

    /// Computes the balance after applying a movement.
    ///
    /// An `out` movement larger than the balance is a hard rejection,
    /// never a clamp to zero.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientStock` when issuing more than is on hand, or
    /// `BalanceOverflow` when a receipt would exceed the integer range.
    pub fn apply(
        balance: i32,
        movement_type: MovementType,
        quantity: i32,
    ) -> Result<i32, LedgerError> {
        if quantity <= 0 {
            return Err(LedgerError::NonPositiveQuantity(quantity));
        }

        match movement_type {
            MovementType::In => balance
                .checked_add(quantity)
                .ok_or(LedgerError::BalanceOverflow),
            MovementType::Out => {
                if balance < quantity {
                    return Err(LedgerError::InsufficientStock {
                        available: balance,
                        requested: quantity,
                    });
                }
                Ok(balance - quantity)
            }
        }
    }

    /// Signed effect of a movement on the balance (`+quantity` for `in`,
    /// `-quantity` for `out`).
    #[must_use]
    pub fn signed_effect(movement_type: MovementType, quantity: i32) -> i64 {
        match movement_type {
            MovementType::In => i64::from(quantity),
            MovementType::Out => -i64::from(quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_draft(movement_type: MovementType, quantity: i32, reason: &str) -> MovementDraft {
        MovementDraft {
            product_id: Uuid::new_v4(),
            movement_type,
            quantity,
            reason: reason.to_string(),
            reference: None,
            notes: None,
            created_by: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        let draft = make_draft(MovementType::In, 100, "Purchase");
        assert!(LedgerService::validate(&draft).is_ok());
    }

    #[test]
    fn test_validate_zero_quantity() {
        let draft = make_draft(MovementType::In, 0, "Purchase");
        assert!(matches!(
            LedgerService::validate(&draft),
            Err(LedgerError::NonPositiveQuantity(0))
        ));
    }

    #[test]
    fn test_validate_negative_quantity() {
        let draft = make_draft(MovementType::Out, -5, "Sale");
        assert!(matches!(
            LedgerService::validate(&draft),
            Err(LedgerError::NonPositiveQuantity(-5))
        ));
    }

    #[test]
    fn test_validate_blank_reason() {
        let draft = make_draft(MovementType::In, 10, "   ");
        assert!(matches!(
            LedgerService::validate(&draft),
            Err(LedgerError::ReasonRequired)
        ));
    }

    #[test]
    fn test_apply_in_increases_balance() {
        assert_eq!(LedgerService::apply(0, MovementType::In, 100).unwrap(), 100);
        assert_eq!(LedgerService::apply(70, MovementType::In, 5).unwrap(), 75);
    }

    #[test]
    fn test_apply_out_decreases_balance() {
        assert_eq!(LedgerService::apply(100, MovementType::Out, 30).unwrap(), 70);
        assert_eq!(LedgerService::apply(5, MovementType::Out, 5).unwrap(), 0);
    }

    #[test]
    fn test_apply_out_beyond_balance_rejected() {
        let result = LedgerService::apply(70, MovementType::Out, 1000);
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientStock {
                available: 70,
                requested: 1000
            })
        ));
    }

    #[test]
    fn test_apply_out_on_empty_balance_rejected() {
        assert!(matches!(
            LedgerService::apply(0, MovementType::Out, 1),
            Err(LedgerError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn test_apply_in_overflow_rejected() {
        assert!(matches!(
            LedgerService::apply(i32::MAX, MovementType::In, 1),
            Err(LedgerError::BalanceOverflow)
        ));
    }

    #[test]
    fn test_signed_effect() {
        assert_eq!(LedgerService::signed_effect(MovementType::In, 10), 10);
        assert_eq!(LedgerService::signed_effect(MovementType::Out, 10), -10);
    }
}
