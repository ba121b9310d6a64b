//! Catalog error types.

use thiserror::Error;

/// Errors from validating a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product name is required.
    #[error("A product name is required")]
    NameRequired,

    /// A SKU is required.
    #[error("A SKU is required")]
    SkuRequired,

    /// Unit price cannot be negative.
    #[error("Unit price cannot be negative")]
    NegativePrice,

    /// Stock levels cannot be negative.
    #[error("Stock levels cannot be negative")]
    NegativeStock,

    /// Minimum stock cannot exceed maximum stock.
    #[error("Minimum stock cannot exceed maximum stock")]
    MinAboveMax,

    /// Products in a medicinal category must carry an expiry date.
    #[error("An expiry date is required for products in a medicinal category")]
    ExpiryRequired,
}

impl CatalogError {
    /// Returns the HTTP status code for this error. Always a 400; every
    /// variant is an input problem.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        400
    }
}
