//! `SeaORM` Entity for the categories table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A product category. `is_medicine` drives the expiry-date requirement on
/// products filed under it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Category ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Category name; unique.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether products in this category require an expiry date.
    pub is_medicine: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
