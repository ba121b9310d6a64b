//! Supplier repository for catalog database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::suppliers;

/// Error types for supplier operations.
#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    /// Supplier not found.
    #[error("Supplier not found: {0}")]
    NotFound(Uuid),

    /// A supplier name is required.
    #[error("A supplier name is required")]
    NameRequired,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SupplierError> for stockroom_shared::AppError {
    fn from(e: SupplierError) -> Self {
        match e {
            SupplierError::NotFound(_) => Self::NotFound(e.to_string()),
            SupplierError::NameRequired => Self::Validation(e.to_string()),
            SupplierError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

/// Input for creating a supplier.
#[derive(Debug, Clone)]
pub struct CreateSupplierInput {
    /// Supplier name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Input for updating a supplier. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSupplierInput {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New address.
    pub address: Option<String>,
}

/// Supplier repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    db: DatabaseConnection,
}

impl SupplierRepository {
    /// Creates a new supplier repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists suppliers, name-ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_suppliers(&self) -> Result<Vec<suppliers::Model>, SupplierError> {
        Ok(suppliers::Entity::find()
            .order_by_asc(suppliers::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Creates a supplier.
    ///
    /// # Errors
    ///
    /// Returns `NameRequired` on a blank name.
    pub async fn create_supplier(
        &self,
        input: CreateSupplierInput,
    ) -> Result<suppliers::Model, SupplierError> {
        if input.name.trim().is_empty() {
            return Err(SupplierError::NameRequired);
        }

        Ok(suppliers::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?)
    }

    /// Updates a supplier. Absent fields stay as they are.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `NameRequired`.
    pub async fn update_supplier(
        &self,
        id: Uuid,
        input: UpdateSupplierInput,
    ) -> Result<suppliers::Model, SupplierError> {
        let supplier = suppliers::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(SupplierError::NotFound(id))?;

        if let Some(name) = &input.name
            && name.trim().is_empty()
        {
            return Err(SupplierError::NameRequired);
        }

        let mut active: suppliers::ActiveModel = supplier.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(email) = input.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = input.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(address) = input.address {
            active.address = Set(Some(address));
        }

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a supplier. Products keep existing with their supplier
    /// cleared (FK is ON DELETE SET NULL).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such supplier exists.
    pub async fn delete_supplier(&self, id: Uuid) -> Result<(), SupplierError> {
        suppliers::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(SupplierError::NotFound(id))?;

        suppliers::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}
