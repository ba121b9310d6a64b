//! `SeaORM` Entity for the request_counters table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-year counter backing budget-request numbering.
///
/// One row per calendar year. The row is locked and incremented inside the
/// request-creation transaction, so two requests created in the same instant
/// can never compute the same sequence.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "request_counters")]
pub struct Model {
    /// Calendar year.
    #[sea_orm(primary_key, auto_increment = false)]
    pub year: i32,
    /// Last sequence issued for this year.
    pub last_sequence: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
