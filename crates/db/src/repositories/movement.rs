//! Movement repository: the single boundary for posting stock movements.
//!
//! Posting appends a ledger row and adjusts the product balance in one
//! database transaction, with the product row locked for the duration.
//! Nothing else in the system writes `current_stock` alongside a movement.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use stockroom_core::ledger::{LedgerError, LedgerService, MovementDraft};
use stockroom_shared::Pagination;

use crate::entities::{movements, products};

/// A movement joined with its product's display fields.
#[derive(Debug, Clone)]
pub struct MovementWithProduct {
    /// The ledger row.
    pub movement: movements::Model,
    /// Product name, if the product still exists.
    pub product_name: Option<String>,
    /// Product SKU, if the product still exists.
    pub sku: Option<String>,
}

/// Movement repository for ledger operations.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    db: DatabaseConnection,
}

impl MovementRepository {
    /// Creates a new movement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a stock movement.
    ///
    /// Unit of work, all inside one transaction:
    /// 1. Lock the product row (`SELECT ... FOR UPDATE`); concurrent
    ///    posters against the same product serialize here.
    /// 2. Compute the new balance; an `out` beyond the balance is rejected
    ///    before anything is written.
    /// 3. Append the ledger row and update `current_stock`.
    ///
    /// On any failure the transaction rolls back whole: no ledger row
    /// without a balance change is ever observable, and vice versa.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` for invalid drafts, a missing product,
    /// insufficient stock, or a storage failure.
    pub async fn post_movement(
        &self,
        draft: MovementDraft,
    ) -> Result<movements::Model, LedgerError> {
        LedgerService::validate(&draft)?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let product = products::Entity::find_by_id(draft.product_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::ProductNotFound(draft.product_id))?;

        let new_balance =
            LedgerService::apply(product.current_stock, draft.movement_type, draft.quantity)?;

        let now = Utc::now().into();
        let movement = movements::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product.id),
            movement_type: Set(draft.movement_type.into()),
            quantity: Set(draft.quantity),
            reason: Set(draft.reason),
            reference: Set(draft.reference),
            notes: Set(draft.notes),
            created_by: Set(draft.created_by),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        let mut product: products::ActiveModel = product.into();
        product.current_stock = Set(new_balance);
        product.updated_at = Set(now);
        product.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::info!(
            movement_id = %movement.id,
            product_id = %movement.product_id,
            quantity = movement.quantity,
            new_balance,
            "Posted stock movement"
        );

        Ok(movement)
    }

    /// Lists movements, newest first, with product name and SKU joined.
    ///
    /// Returns the page of movements and the total row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_movements(
        &self,
        product_id: Option<Uuid>,
        pagination: Pagination,
    ) -> Result<(Vec<MovementWithProduct>, u64), LedgerError> {
        let mut query = movements::Entity::find();
        if let Some(product_id) = product_id {
            query = query.filter(movements::Column::ProductId.eq(product_id));
        }

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let rows = query
            .find_also_related(products::Entity)
            .order_by_desc(movements::Column::CreatedAt)
            .offset(pagination.offset())
            .limit(pagination.limit())
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let movements = rows
            .into_iter()
            .map(|(movement, product)| MovementWithProduct {
                movement,
                product_name: product.as_ref().map(|p| p.name.clone()),
                sku: product.map(|p| p.sku),
            })
            .collect();

        Ok((movements, total))
    }
}

fn db_err(e: DbErr) -> LedgerError {
    LedgerError::Database(e.to_string())
}
