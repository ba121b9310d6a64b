//! Product validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::CatalogError;

/// The fields of a product that are subject to validation.
///
/// The repository assembles this from the incoming payload plus the
/// referenced category's medicine flag, for both creates and updates.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Stock-keeping unit; unique per product.
    pub sku: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Opening or updated balance.
    pub current_stock: i32,
    /// Reorder threshold.
    pub min_stock: i32,
    /// Optional stock ceiling.
    pub max_stock: Option<i32>,
    /// Optional expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// Whether the referenced category is flagged medicinal.
    pub category_is_medicine: bool,
}

/// Stateless validator for catalog entries.
pub struct CatalogService;

impl CatalogService {
    /// Validates a product draft.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when a required field is blank, a quantity or
    /// price is negative, min exceeds max, or a medicinal product has no
    /// expiry date.
    pub fn validate_product(draft: &ProductDraft) -> Result<(), CatalogError> {
        if draft.name.trim().is_empty() {
            return Err(CatalogError::NameRequired);
        }
        if draft.sku.trim().is_empty() {
            return Err(CatalogError::SkuRequired);
        }
        if draft.unit_price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice);
        }
        if draft.current_stock < 0 || draft.min_stock < 0 || draft.max_stock.is_some_and(|m| m < 0)
        {
            return Err(CatalogError::NegativeStock);
        }
        if let Some(max) = draft.max_stock
            && draft.min_stock > max
        {
            return Err(CatalogError::MinAboveMax);
        }
        if draft.category_is_medicine && draft.expiry_date.is_none() {
            return Err(CatalogError::ExpiryRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_draft() -> ProductDraft {
        ProductDraft {
            name: "Paracetamol 500mg".to_string(),
            sku: "MED-001".to_string(),
            unit_price: dec!(1.50),
            current_stock: 0,
            min_stock: 10,
            max_stock: Some(500),
            expiry_date: NaiveDate::from_ymd_opt(2027, 6, 30),
            category_is_medicine: true,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(CatalogService::validate_product(&make_draft()).is_ok());
    }

    #[test]
    fn test_name_required() {
        let mut draft = make_draft();
        draft.name = "  ".to_string();
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::NameRequired)
        );
    }

    #[test]
    fn test_sku_required() {
        let mut draft = make_draft();
        draft.sku = String::new();
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::SkuRequired)
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut draft = make_draft();
        draft.unit_price = dec!(-0.01);
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::NegativePrice)
        );
    }

    #[test]
    fn test_negative_stock_rejected() {
        let mut draft = make_draft();
        draft.current_stock = -1;
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::NegativeStock)
        );

        let mut draft = make_draft();
        draft.max_stock = Some(-5);
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::NegativeStock)
        );
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut draft = make_draft();
        draft.min_stock = 600;
        draft.max_stock = Some(500);
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::MinAboveMax)
        );
    }

    #[test]
    fn test_medicine_requires_expiry() {
        let mut draft = make_draft();
        draft.expiry_date = None;
        assert_eq!(
            CatalogService::validate_product(&draft),
            Err(CatalogError::ExpiryRequired)
        );
    }

    #[test]
    fn test_non_medicine_without_expiry_ok() {
        let mut draft = make_draft();
        draft.category_is_medicine = false;
        draft.expiry_date = None;
        assert!(CatalogService::validate_product(&draft).is_ok());
    }

    #[test]
    fn test_no_max_stock_ok() {
        let mut draft = make_draft();
        draft.max_stock = None;
        draft.min_stock = 100_000;
        assert!(CatalogService::validate_product(&draft).is_ok());
    }
}
