//! Product repository for catalog database operations.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use stockroom_core::catalog::{CatalogError, CatalogService, ProductDraft};

use crate::entities::{categories, products, suppliers};

/// Error types for product operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Product not found.
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    /// No product carries the given SKU.
    #[error("Product not found for SKU: {0}")]
    SkuNotFound(String),

    /// Another product already carries the given SKU.
    #[error("SKU already in use: {0}")]
    DuplicateSku(String),

    /// Referenced category does not exist.
    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),

    /// Referenced supplier does not exist.
    #[error("Supplier not found: {0}")]
    SupplierNotFound(Uuid),

    /// Validation failure.
    #[error(transparent)]
    Invalid(#[from] CatalogError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ProductError> for stockroom_shared::AppError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) | ProductError::SkuNotFound(_) => {
                Self::NotFound(e.to_string())
            }
            ProductError::DuplicateSku(_) => Self::Conflict(e.to_string()),
            ProductError::CategoryNotFound(_)
            | ProductError::SupplierNotFound(_)
            | ProductError::Invalid(_) => Self::Validation(e.to_string()),
            ProductError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    /// Product name.
    pub name: String,
    /// Stock-keeping unit; unique.
    pub sku: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Supplier reference.
    pub supplier_id: Option<Uuid>,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Opening balance.
    pub current_stock: i32,
    /// Reorder threshold.
    pub min_stock: i32,
    /// Optional stock ceiling.
    pub max_stock: Option<i32>,
    /// Unit label.
    pub unit: Option<String>,
    /// Storage location.
    pub location: Option<String>,
    /// Barcode value.
    pub barcode: Option<String>,
    /// Expiry date; required for medicinal categories.
    pub expiry_date: Option<NaiveDate>,
}

/// Input for updating a product. Absent fields are left unchanged,
/// matching the COALESCE semantics of the original update statements.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    /// New name.
    pub name: Option<String>,
    /// New SKU.
    pub sku: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category reference.
    pub category_id: Option<Uuid>,
    /// New supplier reference.
    pub supplier_id: Option<Uuid>,
    /// New unit price.
    pub unit_price: Option<Decimal>,
    /// Direct balance override; bypasses the ledger (see invariant note
    /// in DESIGN.md).
    pub current_stock: Option<i32>,
    /// New reorder threshold.
    pub min_stock: Option<i32>,
    /// New stock ceiling.
    pub max_stock: Option<i32>,
    /// New unit label.
    pub unit: Option<String>,
    /// New storage location.
    pub location: Option<String>,
    /// New barcode value.
    pub barcode: Option<String>,
    /// New expiry date.
    pub expiry_date: Option<NaiveDate>,
}

/// A product joined with its category and supplier names.
#[derive(Debug, Clone)]
pub struct ProductWithRefs {
    /// The product row.
    pub product: products::Model,
    /// Category name, if a category is set.
    pub category_name: Option<String>,
    /// Supplier name, if a supplier is set.
    pub supplier_name: Option<String>,
}

/// Product repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists products, name-ordered, with category and supplier names.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn list_products(&self) -> Result<Vec<ProductWithRefs>, ProductError> {
        let products = products::Entity::find()
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await?;

        let category_names: HashMap<Uuid, String> = categories::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let supplier_names: HashMap<Uuid, String> = suppliers::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(products
            .into_iter()
            .map(|product| {
                let category_name = product
                    .category_id
                    .and_then(|id| category_names.get(&id).cloned());
                let supplier_name = product
                    .supplier_id
                    .and_then(|id| supplier_names.get(&id).cloned());
                ProductWithRefs {
                    product,
                    category_name,
                    supplier_name,
                }
            })
            .collect())
    }

    /// Gets a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such product exists.
    pub async fn get_product(&self, id: Uuid) -> Result<products::Model, ProductError> {
        products::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Gets a product by SKU (barcode lookups resolve through this).
    ///
    /// # Errors
    ///
    /// Returns `SkuNotFound` if no product carries the SKU.
    pub async fn get_product_by_sku(&self, sku: &str) -> Result<products::Model, ProductError> {
        products::Entity::find()
            .filter(products::Column::Sku.eq(sku))
            .one(&self.db)
            .await?
            .ok_or_else(|| ProductError::SkuNotFound(sku.to_string()))
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced category/supplier is missing, the
    /// draft fails validation, or the SKU is already taken.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<products::Model, ProductError> {
        let category_is_medicine = self.category_is_medicine(input.category_id).await?;
        if let Some(supplier_id) = input.supplier_id {
            self.ensure_supplier_exists(supplier_id).await?;
        }

        CatalogService::validate_product(&ProductDraft {
            name: input.name.clone(),
            sku: input.sku.clone(),
            unit_price: input.unit_price,
            current_stock: input.current_stock,
            min_stock: input.min_stock,
            max_stock: input.max_stock,
            expiry_date: input.expiry_date,
            category_is_medicine,
        })?;

        let now = Utc::now().into();
        let result = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            sku: Set(input.sku.clone()),
            description: Set(input.description),
            category_id: Set(input.category_id),
            supplier_id: Set(input.supplier_id),
            unit_price: Set(input.unit_price),
            current_stock: Set(input.current_stock),
            min_stock: Set(input.min_stock),
            max_stock: Set(input.max_stock),
            unit: Set(input.unit),
            location: Set(input.location),
            barcode: Set(input.barcode),
            expiry_date: Set(input.expiry_date),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(product) => Ok(product),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ProductError::DuplicateSku(input.sku))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Updates a product. Absent fields stay as they are.
    ///
    /// The effective post-update values are validated as a whole, so a
    /// category change onto a medicinal category still demands an expiry
    /// date.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is missing, a referenced
    /// category/supplier is missing, validation fails, or the new SKU is
    /// already taken.
    pub async fn update_product(
        &self,
        id: Uuid,
        input: UpdateProductInput,
    ) -> Result<products::Model, ProductError> {
        let product = self.get_product(id).await?;

        let category_id = input.category_id.or(product.category_id);
        let supplier_id = input.supplier_id.or(product.supplier_id);
        let category_is_medicine = self.category_is_medicine(category_id).await?;
        if let Some(supplier_id) = input.supplier_id {
            self.ensure_supplier_exists(supplier_id).await?;
        }

        let name = input.name.unwrap_or_else(|| product.name.clone());
        let sku = input.sku.unwrap_or_else(|| product.sku.clone());
        let unit_price = input.unit_price.unwrap_or(product.unit_price);
        let current_stock = input.current_stock.unwrap_or(product.current_stock);
        let min_stock = input.min_stock.unwrap_or(product.min_stock);
        let max_stock = input.max_stock.or(product.max_stock);
        let expiry_date = input.expiry_date.or(product.expiry_date);

        CatalogService::validate_product(&ProductDraft {
            name: name.clone(),
            sku: sku.clone(),
            unit_price,
            current_stock,
            min_stock,
            max_stock,
            expiry_date,
            category_is_medicine,
        })?;

        let mut active: products::ActiveModel = product.into();
        active.name = Set(name);
        active.sku = Set(sku.clone());
        active.unit_price = Set(unit_price);
        active.current_stock = Set(current_stock);
        active.min_stock = Set(min_stock);
        active.max_stock = Set(max_stock);
        active.expiry_date = Set(expiry_date);
        active.category_id = Set(category_id);
        active.supplier_id = Set(supplier_id);
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(unit) = input.unit {
            active.unit = Set(Some(unit));
        }
        if let Some(location) = input.location {
            active.location = Set(Some(location));
        }
        if let Some(barcode) = input.barcode {
            active.barcode = Set(Some(barcode));
        }
        active.updated_at = Set(Utc::now().into());

        match active.update(&self.db).await {
            Ok(product) => Ok(product),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ProductError::DuplicateSku(sku))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a product and, via cascade, its movements.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such product exists.
    pub async fn delete_product(&self, id: Uuid) -> Result<(), ProductError> {
        self.get_product(id).await?;

        products::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }

    /// Resolves whether the referenced category is flagged medicinal.
    async fn category_is_medicine(&self, category_id: Option<Uuid>) -> Result<bool, ProductError> {
        let Some(category_id) = category_id else {
            return Ok(false);
        };

        let category = categories::Entity::find_by_id(category_id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::CategoryNotFound(category_id))?;

        Ok(category.is_medicine)
    }

    async fn ensure_supplier_exists(&self, supplier_id: Uuid) -> Result<(), ProductError> {
        suppliers::Entity::find_by_id(supplier_id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::SupplierNotFound(supplier_id))?;
        Ok(())
    }
}
