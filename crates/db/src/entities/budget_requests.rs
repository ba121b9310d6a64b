//! `SeaORM` Entity for the budget_requests table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::RequestStatus;

/// A request for funds awaiting approval.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_requests")]
pub struct Model {
    /// Request ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human-readable number, `BR-<year>-<sequence>`; unique.
    pub request_no: String,
    /// Who is asking for the funds.
    pub requester: String,
    /// Date of the request.
    pub request_date: Date,
    /// Account code the spend is booked against.
    pub account_code: String,
    /// Account name matching the code.
    pub account_name: String,
    /// Requested amount.
    pub amount: Decimal,
    /// Optional note.
    pub note: Option<String>,
    /// Material list as a JSON array of `{item, quantity}` pairs.
    pub material_list: Json,
    /// Workflow status.
    pub status: RequestStatus,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::approvals::Entity")]
    Approvals,
}

impl Related<super::approvals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Approvals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
