//! Account-code repository. Read-only lookup data for budget requests.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::entities::account_codes;

/// Account-code repository.
#[derive(Debug, Clone)]
pub struct AccountCodeRepository {
    db: DatabaseConnection,
}

impl AccountCodeRepository {
    /// Creates a new account-code repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists account codes, code-ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_account_codes(&self) -> Result<Vec<account_codes::Model>, DbErr> {
        account_codes::Entity::find()
            .order_by_asc(account_codes::Column::Code)
            .all(&self.db)
            .await
    }
}
