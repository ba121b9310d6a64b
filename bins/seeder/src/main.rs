//! Database seeder for Stockroom development and testing.
//!
//! Seeds a sample supplier and a handful of products on top of the
//! categories and account codes created by the initial migration.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use stockroom_db::entities::{categories, products, suppliers};

/// Sample supplier ID (consistent for all seeds)
const SAMPLE_SUPPLIER_ID: &str = "00000000-0000-0000-0000-000000000101";
/// Sample general product ID
const SAMPLE_PRODUCT_ID: &str = "00000000-0000-0000-0000-000000000102";
/// Sample medicine product ID
const SAMPLE_MEDICINE_ID: &str = "00000000-0000-0000-0000-000000000103";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = stockroom_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding sample supplier...");
    seed_supplier(&db).await;

    println!("Seeding sample products...");
    seed_products(&db).await;

    println!("Seeding complete!");
}

fn sample_supplier_id() -> Uuid {
    Uuid::parse_str(SAMPLE_SUPPLIER_ID).unwrap()
}

/// Seeds a sample supplier for development.
async fn seed_supplier(db: &DatabaseConnection) {
    if suppliers::Entity::find_by_id(sample_supplier_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Sample supplier already exists, skipping...");
        return;
    }

    suppliers::ActiveModel {
        id: Set(sample_supplier_id()),
        name: Set("Acme Trading Co.".to_string()),
        email: Set(Some("sales@acme-trading.example".to_string())),
        phone: Set(Some("02-123-4567".to_string())),
        address: Set(Some("88 Warehouse Road".to_string())),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed supplier");
}

/// Seeds sample products against the migrated categories.
async fn seed_products(db: &DatabaseConnection) {
    let general = category_id_by_name(db, "General").await;
    let medicine = category_id_by_name(db, "Medicine").await;

    let samples = [
        (
            SAMPLE_PRODUCT_ID,
            "A4 Copy Paper",
            "GEN-0001",
            general,
            Decimal::new(12500, 2),
            40,
            None,
        ),
        (
            SAMPLE_MEDICINE_ID,
            "Paracetamol 500mg",
            "MED-0001",
            medicine,
            Decimal::new(150, 2),
            200,
            NaiveDate::from_ymd_opt(2027, 6, 30),
        ),
    ];

    for (id, name, sku, category_id, unit_price, stock, expiry_date) in samples {
        let id = Uuid::parse_str(id).unwrap();
        if products::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Product {sku} already exists, skipping...");
            continue;
        }

        let now = Utc::now().into();
        products::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            sku: Set(sku.to_string()),
            description: Set(None),
            category_id: Set(category_id),
            supplier_id: Set(Some(sample_supplier_id())),
            unit_price: Set(unit_price),
            current_stock: Set(stock),
            min_stock: Set(10),
            max_stock: Set(None),
            unit: Set(Some("pcs".to_string())),
            location: Set(None),
            barcode: Set(None),
            expiry_date: Set(expiry_date),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to seed product");
    }
}

async fn category_id_by_name(db: &DatabaseConnection, name: &str) -> Option<Uuid> {
    categories::Entity::find()
        .filter(categories::Column::Name.eq(name))
        .one(db)
        .await
        .ok()
        .flatten()
        .map(|c| c.id)
}
