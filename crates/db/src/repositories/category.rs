//! Category repository for catalog database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use crate::entities::categories;

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category not found.
    #[error("Category not found: {0}")]
    NotFound(Uuid),

    /// A category name is required.
    #[error("A category name is required")]
    NameRequired,

    /// Another category already carries the given name.
    #[error("Category name already in use: {0}")]
    DuplicateName(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CategoryError> for stockroom_shared::AppError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(_) => Self::NotFound(e.to_string()),
            CategoryError::NameRequired => Self::Validation(e.to_string()),
            CategoryError::DuplicateName(_) => Self::Conflict(e.to_string()),
            CategoryError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

/// Input for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Category name; unique.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether products in this category require an expiry date.
    pub is_medicine: bool,
}

/// Input for updating a category. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New medicine flag.
    pub is_medicine: Option<bool>,
}

/// Category repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists categories, name-ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_categories(&self) -> Result<Vec<categories::Model>, CategoryError> {
        Ok(categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns `NameRequired` or `DuplicateName` on invalid input.
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<categories::Model, CategoryError> {
        if input.name.trim().is_empty() {
            return Err(CategoryError::NameRequired);
        }

        let result = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.clone()),
            description: Set(input.description),
            is_medicine: Set(input.is_medicine),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(category) => Ok(category),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(CategoryError::DuplicateName(input.name))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Updates a category. Absent fields stay as they are.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `NameRequired`, or `DuplicateName`.
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateCategoryInput,
    ) -> Result<categories::Model, CategoryError> {
        let category = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        if let Some(name) = &input.name
            && name.trim().is_empty()
        {
            return Err(CategoryError::NameRequired);
        }

        let mut active: categories::ActiveModel = category.into();
        let name_for_err = input.name.clone();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(is_medicine) = input.is_medicine {
            active.is_medicine = Set(is_medicine);
        }

        match active.update(&self.db).await {
            Ok(category) => Ok(category),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(CategoryError::DuplicateName(name_for_err.unwrap_or_default()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a category. Products keep existing with their category
    /// cleared (FK is ON DELETE SET NULL).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such category exists.
    pub async fn delete_category(&self, id: Uuid) -> Result<(), CategoryError> {
        categories::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        categories::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}
