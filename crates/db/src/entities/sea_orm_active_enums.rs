//! Database enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a stock movement (`movement_type` enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "movement_type")]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Goods received.
    #[sea_orm(string_value = "in")]
    In,
    /// Goods issued.
    #[sea_orm(string_value = "out")]
    Out,
}

/// Budget-request status (`request_status` enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "request_status")]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    /// Waiting for a decision.
    #[sea_orm(string_value = "PENDING")]
    Pending,
    /// Approved; terminal.
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    /// Rejected; terminal.
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

/// Approval decision (`approval_decision` enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "approval_decision")]
#[serde(rename_all = "lowercase")]
pub enum ApprovalDecision {
    /// The request was approved.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// The request was rejected.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<stockroom_core::ledger::MovementType> for MovementType {
    fn from(value: stockroom_core::ledger::MovementType) -> Self {
        match value {
            stockroom_core::ledger::MovementType::In => Self::In,
            stockroom_core::ledger::MovementType::Out => Self::Out,
        }
    }
}

impl From<MovementType> for stockroom_core::ledger::MovementType {
    fn from(value: MovementType) -> Self {
        match value {
            MovementType::In => Self::In,
            MovementType::Out => Self::Out,
        }
    }
}

impl From<stockroom_core::approval::RequestStatus> for RequestStatus {
    fn from(value: stockroom_core::approval::RequestStatus) -> Self {
        match value {
            stockroom_core::approval::RequestStatus::Pending => Self::Pending,
            stockroom_core::approval::RequestStatus::Approved => Self::Approved,
            stockroom_core::approval::RequestStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<RequestStatus> for stockroom_core::approval::RequestStatus {
    fn from(value: RequestStatus) -> Self {
        match value {
            RequestStatus::Pending => Self::Pending,
            RequestStatus::Approved => Self::Approved,
            RequestStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<stockroom_core::approval::Decision> for ApprovalDecision {
    fn from(value: stockroom_core::approval::Decision) -> Self {
        match value {
            stockroom_core::approval::Decision::Approved => Self::Approved,
            stockroom_core::approval::Decision::Rejected => Self::Rejected,
        }
    }
}

impl From<ApprovalDecision> for stockroom_core::approval::Decision {
    fn from(value: ApprovalDecision) -> Self {
        match value {
            ApprovalDecision::Approved => Self::Approved,
            ApprovalDecision::Rejected => Self::Rejected,
        }
    }
}
