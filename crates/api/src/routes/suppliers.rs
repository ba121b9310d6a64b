//! Supplier management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{AppState, routes::app_error_response};
use stockroom_db::entities::suppliers;
use stockroom_db::repositories::supplier::{
    CreateSupplierInput, SupplierError, SupplierRepository, UpdateSupplierInput,
};

/// Creates the supplier routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers))
        .route("/suppliers", post(create_supplier))
        .route("/suppliers/{id}", put(update_supplier))
        .route("/suppliers/{id}", delete(delete_supplier))
}

/// Request body for creating a supplier.
#[derive(Debug, Deserialize)]
pub struct CreateSupplierRequest {
    /// Supplier name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Request body for updating a supplier. Absent fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateSupplierRequest {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New address.
    pub address: Option<String>,
}

/// Response for a supplier.
#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    /// Supplier ID.
    pub id: Uuid,
    /// Supplier name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Created at timestamp.
    pub created_at: String,
}

impl From<suppliers::Model> for SupplierResponse {
    fn from(model: suppliers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

fn supplier_error_response(e: SupplierError) -> (StatusCode, Json<serde_json::Value>) {
    app_error_response(&e.into())
}

/// GET `/suppliers` - List suppliers, name-ordered.
async fn list_suppliers(State(state): State<AppState>) -> impl IntoResponse {
    let repo = SupplierRepository::new((*state.db).clone());

    match repo.list_suppliers().await {
        Ok(suppliers) => {
            let items: Vec<SupplierResponse> =
                suppliers.into_iter().map(SupplierResponse::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list suppliers");
            supplier_error_response(e).into_response()
        }
    }
}

/// POST `/suppliers` - Create a supplier.
async fn create_supplier(
    State(state): State<AppState>,
    Json(body): Json<CreateSupplierRequest>,
) -> impl IntoResponse {
    let repo = SupplierRepository::new((*state.db).clone());

    match repo
        .create_supplier(CreateSupplierInput {
            name: body.name,
            email: body.email,
            phone: body.phone,
            address: body.address,
        })
        .await
    {
        Ok(supplier) => {
            (StatusCode::CREATED, Json(SupplierResponse::from(supplier))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create supplier");
            supplier_error_response(e).into_response()
        }
    }
}

/// PUT `/suppliers/{id}` - Update a supplier.
async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSupplierRequest>,
) -> impl IntoResponse {
    let repo = SupplierRepository::new((*state.db).clone());

    match repo
        .update_supplier(
            id,
            UpdateSupplierInput {
                name: body.name,
                email: body.email,
                phone: body.phone,
                address: body.address,
            },
        )
        .await
    {
        Ok(supplier) => (StatusCode::OK, Json(SupplierResponse::from(supplier))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update supplier");
            supplier_error_response(e).into_response()
        }
    }
}

/// DELETE `/suppliers/{id}` - Delete a supplier.
async fn delete_supplier(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = SupplierRepository::new((*state.db).clone());

    match repo.delete_supplier(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete supplier");
            supplier_error_response(e).into_response()
        }
    }
}
