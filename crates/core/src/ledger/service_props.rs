//! Property tests for ledger balance arithmetic.

use proptest::prelude::*;

use super::error::LedgerError;
use super::service::LedgerService;
use super::types::MovementType;

fn balance_strategy() -> impl Strategy<Value = i32> {
    0i32..1_000_000
}

fn quantity_strategy() -> impl Strategy<Value = i32> {
    1i32..1_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A receipt followed by an issue of the same quantity restores the
    /// starting balance.
    #[test]
    fn prop_in_then_out_is_identity(
        balance in balance_strategy(),
        quantity in quantity_strategy(),
    ) {
        let after_in = LedgerService::apply(balance, MovementType::In, quantity).unwrap();
        let after_out = LedgerService::apply(after_in, MovementType::Out, quantity).unwrap();
        prop_assert_eq!(after_out, balance);
    }

    /// Applying a movement never produces a negative balance.
    #[test]
    fn prop_balance_never_negative(
        balance in balance_strategy(),
        quantity in quantity_strategy(),
        is_in in any::<bool>(),
    ) {
        let movement_type = if is_in { MovementType::In } else { MovementType::Out };
        if let Ok(next) = LedgerService::apply(balance, movement_type, quantity) {
            prop_assert!(next >= 0);
        }
    }

    /// Issuing more than the balance is always rejected, and rejection
    /// implies the overdraw condition really held.
    #[test]
    fn prop_overdraw_always_rejected(
        balance in balance_strategy(),
        quantity in quantity_strategy(),
    ) {
        let result = LedgerService::apply(balance, MovementType::Out, quantity);
        if quantity > balance {
            let is_insufficient = matches!(result, Err(LedgerError::InsufficientStock { .. }));
            prop_assert!(is_insufficient);
        } else {
            prop_assert_eq!(result.unwrap(), balance - quantity);
        }
    }

    /// The applied balance matches the signed effect of the movement.
    #[test]
    fn prop_apply_matches_signed_effect(
        balance in balance_strategy(),
        quantity in quantity_strategy(),
        is_in in any::<bool>(),
    ) {
        let movement_type = if is_in { MovementType::In } else { MovementType::Out };
        if let Ok(next) = LedgerService::apply(balance, movement_type, quantity) {
            let expected = i64::from(balance) + LedgerService::signed_effect(movement_type, quantity);
            prop_assert_eq!(i64::from(next), expected);
        }
    }

    /// Nonpositive quantities are rejected for both directions.
    #[test]
    fn prop_nonpositive_quantity_rejected(
        balance in balance_strategy(),
        quantity in i32::MIN..=0,
        is_in in any::<bool>(),
    ) {
        let movement_type = if is_in { MovementType::In } else { MovementType::Out };
        prop_assert!(matches!(
            LedgerService::apply(balance, movement_type, quantity),
            Err(LedgerError::NonPositiveQuantity(_))
        ));
    }
}
