//! `SeaORM` Entity for the approvals table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ApprovalDecision;

/// The immutable decision record for a budget request.
///
/// `request_id` is unique: a request is decided exactly once, in the same
/// transaction that moves it out of PENDING.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "approvals")]
pub struct Model {
    /// Approval ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The decided budget request; unique.
    pub request_id: Uuid,
    /// The decision taken.
    pub decision: ApprovalDecision,
    /// Optional remark from the approver.
    pub remark: Option<String>,
    /// Name of the approver.
    pub approver_name: String,
    /// When the decision was taken.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::budget_requests::Entity",
        from = "Column::RequestId",
        to = "super::budget_requests::Column::Id"
    )]
    BudgetRequests,
}

impl Related<super::budget_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
