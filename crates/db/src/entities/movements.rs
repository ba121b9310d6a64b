//! `SeaORM` Entity for the movements table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::MovementType;

/// One entry in the append-only stock ledger.
///
/// Rows are never updated or deleted; corrections are posted as new
/// movements in the opposite direction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "movements")]
pub struct Model {
    /// Movement ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The product moved.
    pub product_id: Uuid,
    /// Direction of the movement.
    #[sea_orm(column_name = "type")]
    pub movement_type: MovementType,
    /// Quantity moved; always positive, the direction carries the sign.
    pub quantity: i32,
    /// Reason for the movement.
    pub reason: String,
    /// Optional document reference.
    pub reference: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
    /// Who recorded the movement.
    pub created_by: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
