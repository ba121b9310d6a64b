//! Budget-request repository.
//!
//! Request creation allocates the `BR-<year>-<sequence>` number from a
//! per-year counter row inside the same transaction as the insert. The
//! counter row is locked, so concurrent creators serialize; the unique
//! constraint on `request_no` backstops the counter.

use chrono::{Datelike, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryOrder,
    QuerySelect, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use stockroom_core::budget::{BudgetError, RequestDraft};
use stockroom_core::numbering::RequestNumber;

use crate::entities::{budget_requests, request_counters, sea_orm_active_enums::RequestStatus};

/// Budget-request repository.
#[derive(Debug, Clone)]
pub struct BudgetRequestRepository {
    db: DatabaseConnection,
}

impl BudgetRequestRepository {
    /// Creates a new budget-request repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a budget request in PENDING status with a freshly allocated
    /// request number.
    ///
    /// A first-ever request for a new year can race another creator on the
    /// counter-row insert; the primary key rejects the loser, which retries
    /// once against the now-existing row.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` if the draft is invalid or a database
    /// operation fails.
    pub async fn create_request(
        &self,
        draft: RequestDraft,
    ) -> Result<budget_requests::Model, BudgetError> {
        let draft = draft.validate()?;

        let mut last_err: Option<DbErr> = None;
        for _ in 0..2 {
            match self.try_create(&draft).await {
                Ok(model) => return Ok(model),
                Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    last_err = Some(e);
                }
                Err(e) => return Err(db_err(e)),
            }
        }

        Err(db_err(last_err.unwrap_or_else(|| {
            DbErr::Custom("request number allocation failed".to_string())
        })))
    }

    async fn try_create(&self, draft: &RequestDraft) -> Result<budget_requests::Model, DbErr> {
        let txn = self.db.begin().await?;

        let number = allocate_request_no(&txn, Utc::now().year()).await?;

        let material_list = serde_json::to_value(&draft.material_list)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let request = budget_requests::ActiveModel {
            id: Set(Uuid::new_v4()),
            request_no: Set(number.to_string()),
            requester: Set(draft.requester.clone()),
            request_date: Set(draft.request_date),
            account_code: Set(draft.account_code.clone()),
            account_name: Set(draft.account_name.clone()),
            amount: Set(draft.amount),
            note: Set(draft.note.clone()),
            material_list: Set(material_list),
            status: Set(RequestStatus::Pending),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(request_no = %request.request_no, "Created budget request");
        Ok(request)
    }

    /// Lists budget requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_requests(&self) -> Result<Vec<budget_requests::Model>, BudgetError> {
        budget_requests::Entity::find()
            .order_by_desc(budget_requests::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    /// Gets a budget request by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such request exists.
    pub async fn get_request(&self, id: Uuid) -> Result<budget_requests::Model, BudgetError> {
        budget_requests::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(BudgetError::NotFound(id))
    }

    /// Deletes a budget request that is still PENDING.
    ///
    /// Decided requests are part of the approval audit trail and stay.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `OnlyPendingDeletable`.
    pub async fn delete_request(&self, id: Uuid) -> Result<(), BudgetError> {
        let request = self.get_request(id).await?;

        if request.status != RequestStatus::Pending {
            return Err(BudgetError::OnlyPendingDeletable);
        }

        budget_requests::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

/// Allocates the next request number for `year` against the locked counter
/// row, creating the row when the year is new.
async fn allocate_request_no(
    txn: &DatabaseTransaction,
    year: i32,
) -> Result<RequestNumber, DbErr> {
    let counter = request_counters::Entity::find_by_id(year)
        .lock_exclusive()
        .one(txn)
        .await?;

    let last = counter
        .as_ref()
        .filter(|c| c.last_sequence > 0)
        .map(|c| RequestNumber::new(c.year, u32::try_from(c.last_sequence).unwrap_or(0)));
    let next = RequestNumber::next_in_year(last.as_ref(), year);

    let sequence = i32::try_from(next.sequence())
        .map_err(|_| DbErr::Custom("request sequence out of range".to_string()))?;

    match counter {
        Some(counter) => {
            let mut counter: request_counters::ActiveModel = counter.into();
            counter.last_sequence = Set(sequence);
            counter.update(txn).await?;
        }
        None => {
            request_counters::ActiveModel {
                year: Set(year),
                last_sequence: Set(sequence),
            }
            .insert(txn)
            .await?;
        }
    }

    Ok(next)
}

fn db_err(e: DbErr) -> BudgetError {
    BudgetError::Database(e.to_string())
}
