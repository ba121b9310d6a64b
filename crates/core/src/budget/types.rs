//! Budget-request domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// One line of the free-text material list on a budget request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialItem {
    /// What is being requested.
    pub item: String,
    /// How much of it, as entered ("2 boxes", "10", ...).
    pub quantity: String,
}

impl MaterialItem {
    /// Returns true when both fields are blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.item.trim().is_empty() && self.quantity.trim().is_empty()
    }
}

/// A budget request as submitted, before a number is allocated.
#[derive(Debug, Clone)]
pub struct RequestDraft {
    /// Who is asking for the funds.
    pub requester: String,
    /// Date of the request.
    pub request_date: NaiveDate,
    /// Account code the spend is booked against.
    pub account_code: String,
    /// Account name matching the code.
    pub account_name: String,
    /// Requested amount.
    pub amount: Decimal,
    /// Optional note.
    pub note: Option<String>,
    /// Materials the funds are for. Blank rows are dropped on validation.
    pub material_list: Vec<MaterialItem>,
}

impl RequestDraft {
    /// Validates the draft and drops blank material rows.
    ///
    /// Requester, account code, and a positive amount are required — the
    /// same fields the original intake form insists on.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` if a required field is missing or the amount
    /// is not positive.
    pub fn validate(mut self) -> Result<Self, BudgetError> {
        if self.requester.trim().is_empty() {
            return Err(BudgetError::RequesterRequired);
        }
        if self.account_code.trim().is_empty() {
            return Err(BudgetError::AccountCodeRequired);
        }
        if self.amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveAmount(self.amount));
        }
        self.material_list.retain(|item| !item.is_blank());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_draft() -> RequestDraft {
        RequestDraft {
            requester: "Somchai".to_string(),
            request_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            account_code: "5101".to_string(),
            account_name: "Office supplies".to_string(),
            amount: dec!(2500),
            note: None,
            material_list: vec![
                MaterialItem {
                    item: "Printer paper".to_string(),
                    quantity: "10 reams".to_string(),
                },
                MaterialItem {
                    item: "  ".to_string(),
                    quantity: "".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_validate_drops_blank_material_rows() {
        let draft = make_draft().validate().unwrap();
        assert_eq!(draft.material_list.len(), 1);
        assert_eq!(draft.material_list[0].item, "Printer paper");
    }

    #[test]
    fn test_validate_requires_requester() {
        let mut draft = make_draft();
        draft.requester = " ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(BudgetError::RequesterRequired)
        ));
    }

    #[test]
    fn test_validate_requires_account_code() {
        let mut draft = make_draft();
        draft.account_code = String::new();
        assert!(matches!(
            draft.validate(),
            Err(BudgetError::AccountCodeRequired)
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_amount() {
        let mut draft = make_draft();
        draft.amount = Decimal::ZERO;
        assert!(matches!(
            draft.validate(),
            Err(BudgetError::NonPositiveAmount(_))
        ));

        let mut draft = make_draft();
        draft.amount = dec!(-10);
        assert!(matches!(
            draft.validate(),
            Err(BudgetError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_material_item_blank() {
        let blank = MaterialItem {
            item: " ".to_string(),
            quantity: String::new(),
        };
        assert!(blank.is_blank());

        let quantity_only = MaterialItem {
            item: String::new(),
            quantity: "5".to_string(),
        };
        assert!(!quantity_only.is_blank());
    }
}
