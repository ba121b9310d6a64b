//! Product management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{AppState, routes::app_error_response};
use stockroom_db::entities::products;
use stockroom_db::repositories::product::{
    CreateProductInput, ProductError, ProductRepository, ProductWithRefs, UpdateProductInput,
};

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", delete(delete_product))
        .route("/products/sku/{sku}", get(get_product_by_sku))
}

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
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
    #[serde(default)]
    pub unit_price: Decimal,
    /// Opening balance.
    #[serde(default)]
    pub current_stock: i32,
    /// Reorder threshold.
    #[serde(default)]
    pub min_stock: i32,
    /// Optional stock ceiling.
    pub max_stock: Option<i32>,
    /// Unit label.
    pub unit: Option<String>,
    /// Storage location.
    pub location: Option<String>,
    /// Barcode value.
    pub barcode: Option<String>,
    /// Expiry date (YYYY-MM-DD); required for medicinal categories.
    pub expiry_date: Option<NaiveDate>,
}

/// Request body for updating a product. Absent fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    /// New name.
    pub name: Option<String>,
    /// New SKU.
    pub sku: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category reference.
    pub category_id: Option<Uuid>,
    /// New supplier reference.
    pub supplier_id: Option<Uuid>,
    /// New unit price.
    pub unit_price: Option<Decimal>,
    /// Direct balance override; bypasses the movement ledger.
    pub current_stock: Option<i32>,
    /// New reorder threshold.
    pub min_stock: Option<i32>,
    /// New stock ceiling.
    pub max_stock: Option<i32>,
    /// New unit label.
    pub unit: Option<String>,
    /// New storage location.
    pub location: Option<String>,
    /// New barcode value.
    pub barcode: Option<String>,
    /// New expiry date.
    pub expiry_date: Option<NaiveDate>,
}

/// Response for a product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    /// Product ID.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// Description.
    pub description: Option<String>,
    /// Category reference.
    pub category_id: Option<Uuid>,
    /// Supplier reference.
    pub supplier_id: Option<Uuid>,
    /// Category name, when listed with references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Supplier name, when listed with references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Quantity on hand.
    pub current_stock: i32,
    /// Reorder threshold.
    pub min_stock: i32,
    /// Stock ceiling.
    pub max_stock: Option<i32>,
    /// Unit label.
    pub unit: Option<String>,
    /// Storage location.
    pub location: Option<String>,
    /// Barcode value.
    pub barcode: Option<String>,
    /// Expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

impl From<products::Model> for ProductResponse {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            sku: model.sku,
            description: model.description,
            category_id: model.category_id,
            supplier_id: model.supplier_id,
            category_name: None,
            supplier_name: None,
            unit_price: model.unit_price,
            current_stock: model.current_stock,
            min_stock: model.min_stock,
            max_stock: model.max_stock,
            unit: model.unit,
            location: model.location,
            barcode: model.barcode,
            expiry_date: model.expiry_date,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

impl From<ProductWithRefs> for ProductResponse {
    fn from(row: ProductWithRefs) -> Self {
        let mut response = Self::from(row.product);
        response.category_name = row.category_name;
        response.supplier_name = row.supplier_name;
        response
    }
}

fn product_error_response(e: ProductError) -> (StatusCode, Json<serde_json::Value>) {
    app_error_response(&e.into())
}

/// GET `/products` - List products with category and supplier names.
async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.list_products().await {
        Ok(products) => {
            let items: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list products");
            product_error_response(e).into_response()
        }
    }
}

/// GET `/products/{id}` - Get a product by ID.
async fn get_product(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.get_product(id).await {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to get product");
            product_error_response(e).into_response()
        }
    }
}

/// GET `/products/sku/{sku}` - Look a product up by SKU.
async fn get_product_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.get_product_by_sku(&sku).await {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to get product by SKU");
            product_error_response(e).into_response()
        }
    }
}

/// POST `/products` - Create a product.
async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo
        .create_product(CreateProductInput {
            name: body.name,
            sku: body.sku,
            description: body.description,
            category_id: body.category_id,
            supplier_id: body.supplier_id,
            unit_price: body.unit_price,
            current_stock: body.current_stock,
            min_stock: body.min_stock,
            max_stock: body.max_stock,
            unit: body.unit,
            location: body.location,
            barcode: body.barcode,
            expiry_date: body.expiry_date,
        })
        .await
    {
        Ok(product) => (StatusCode::CREATED, Json(ProductResponse::from(product))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to create product");
            product_error_response(e).into_response()
        }
    }
}

/// PUT `/products/{id}` - Update a product.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo
        .update_product(
            id,
            UpdateProductInput {
                name: body.name,
                sku: body.sku,
                description: body.description,
                category_id: body.category_id,
                supplier_id: body.supplier_id,
                unit_price: body.unit_price,
                current_stock: body.current_stock,
                min_stock: body.min_stock,
                max_stock: body.max_stock,
                unit: body.unit,
                location: body.location,
                barcode: body.barcode,
                expiry_date: body.expiry_date,
            },
        )
        .await
    {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update product");
            product_error_response(e).into_response()
        }
    }
}

/// DELETE `/products/{id}` - Delete a product and its movements.
async fn delete_product(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.delete_product(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete product");
            product_error_response(e).into_response()
        }
    }
}
