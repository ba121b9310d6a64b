//! `SeaORM` Entity for the products table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A product and its denormalized stock balance.
///
/// `current_stock` mirrors the net sum of the product's movements; it is
/// only adjusted under the row lock held by the movement repository.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Product ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Stock-keeping unit; unique.
    pub sku: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Supplier reference.
    pub supplier_id: Option<Uuid>,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Quantity on hand.
    pub current_stock: i32,
    /// Reorder threshold.
    pub min_stock: i32,
    /// Optional stock ceiling.
    pub max_stock: Option<i32>,
    /// Unit label ("pcs", "box", ...).
    pub unit: Option<String>,
    /// Storage location.
    pub location: Option<String>,
    /// Barcode value.
    pub barcode: Option<String>,
    /// Expiry date; required for medicinal categories.
    pub expiry_date: Option<Date>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::SupplierId",
        to = "super::suppliers::Column::Id"
    )]
    Suppliers,
    #[sea_orm(has_many = "super::movements::Entity")]
    Movements,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl Related<super::movements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
