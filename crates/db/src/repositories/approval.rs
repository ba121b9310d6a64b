//! Approval repository: decides budget requests.
//!
//! A decision updates the request status and writes the approval record in
//! one transaction, with the request row locked. The unique constraint on
//! `approvals.request_id` backstops the single-decision rule.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use stockroom_core::approval::{ApprovalError, ApprovalService, Decision};

use crate::entities::{approvals, budget_requests};

/// Input for deciding a budget request.
#[derive(Debug, Clone)]
pub struct DecisionInput {
    /// The request to decide.
    pub request_id: Uuid,
    /// The decision taken.
    pub decision: Decision,
    /// Name of the approver.
    pub approver_name: String,
    /// Optional remark.
    pub remark: Option<String>,
}

/// An approval joined with its request's number.
#[derive(Debug, Clone)]
pub struct ApprovalWithRequest {
    /// The approval record.
    pub approval: approvals::Model,
    /// The decided request's number.
    pub request_no: Option<String>,
}

/// Approval repository for workflow transitions.
#[derive(Debug, Clone)]
pub struct ApprovalRepository {
    db: DatabaseConnection,
}

impl ApprovalRepository {
    /// Creates a new approval repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Decides a pending budget request.
    ///
    /// Unit of work, all inside one transaction:
    /// 1. Lock the request row.
    /// 2. Validate the transition (only PENDING is decidable).
    /// 3. Insert the approval record and update the request status.
    ///
    /// # Errors
    ///
    /// Returns `RequestNotFound`, `AlreadyDecided`, `ApproverRequired`, or
    /// `Database`.
    pub async fn decide_request(
        &self,
        input: DecisionInput,
    ) -> Result<(budget_requests::Model, approvals::Model), ApprovalError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let request = budget_requests::Entity::find_by_id(input.request_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(ApprovalError::RequestNotFound(input.request_id))?;

        let new_status = ApprovalService::decide(
            request.status.clone().into(),
            input.decision,
            &input.approver_name,
        )?;

        let approval = approvals::ActiveModel {
            id: Set(Uuid::new_v4()),
            request_id: Set(request.id),
            decision: Set(input.decision.into()),
            remark: Set(input.remark),
            approver_name: Set(input.approver_name),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        let request_no = request.request_no.clone();
        let mut request: budget_requests::ActiveModel = request.into();
        request.status = Set(new_status.into());
        let request = request.update(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::info!(
            request_no = %request_no,
            decision = %input.decision,
            "Decided budget request"
        );

        Ok((request, approval))
    }

    /// Lists approvals, newest first, with the request number joined.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_approvals(&self) -> Result<Vec<ApprovalWithRequest>, ApprovalError> {
        let rows = approvals::Entity::find()
            .find_also_related(budget_requests::Entity)
            .order_by_desc(approvals::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(approval, request)| ApprovalWithRequest {
                approval,
                request_no: request.map(|r| r.request_no),
            })
            .collect())
    }
}

fn db_err(e: sea_orm::DbErr) -> ApprovalError {
    ApprovalError::Database(e.to_string())
}
