//! `SeaORM` Entity for the account_codes table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A bookkeeping account code that budget requests are booked against.
/// Seed data; read-only at runtime.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "account_codes")]
pub struct Model {
    /// Account code ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Account code; unique.
    pub code: String,
    /// Account name.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
