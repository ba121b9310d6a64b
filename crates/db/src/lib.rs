//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Repositories own every transactional unit of work: posting a stock
//! movement, deciding a budget request, and allocating request numbers all
//! happen inside a single database transaction here. No caller gets to
//! perform the ledger write and the balance update separately.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AccountCodeRepository, ApprovalRepository, BudgetRequestRepository, CategoryRepository,
    MovementRepository, ProductRepository, SupplierRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
