//! Category management routes.

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
use stockroom_db::entities::categories;
use stockroom_db::repositories::category::{
    CategoryError, CategoryRepository, CreateCategoryInput, UpdateCategoryInput,
};

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
        .route("/categories/{id}", put(update_category))
        .route("/categories/{id}", delete(delete_category))
}

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether products in this category require an expiry date.
    #[serde(default)]
    pub is_medicine: bool,
}

/// Request body for updating a category. Absent fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New medicine flag.
    pub is_medicine: Option<bool>,
}

/// Response for a category.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    /// Category ID.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Medicine flag.
    pub is_medicine: bool,
    /// Created at timestamp.
    pub created_at: String,
}

impl From<categories::Model> for CategoryResponse {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            is_medicine: model.is_medicine,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

fn category_error_response(e: CategoryError) -> (StatusCode, Json<serde_json::Value>) {
    app_error_response(&e.into())
}

/// GET `/categories` - List categories, name-ordered.
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list_categories().await {
        Ok(categories) => {
            let items: Vec<CategoryResponse> =
                categories.into_iter().map(CategoryResponse::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            category_error_response(e).into_response()
        }
    }
}

/// POST `/categories` - Create a category.
async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo
        .create_category(CreateCategoryInput {
            name: body.name,
            description: body.description,
            is_medicine: body.is_medicine,
        })
        .await
    {
        Ok(category) => {
            (StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create category");
            category_error_response(e).into_response()
        }
    }
}

/// PUT `/categories/{id}` - Update a category.
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCategoryRequest>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo
        .update_category(
            id,
            UpdateCategoryInput {
                name: body.name,
                description: body.description,
                is_medicine: body.is_medicine,
            },
        )
        .await
    {
        Ok(category) => (StatusCode::OK, Json(CategoryResponse::from(category))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update category");
            category_error_response(e).into_response()
        }
    }
}

/// DELETE `/categories/{id}` - Delete a category.
async fn delete_category(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.delete_category(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete category");
            category_error_response(e).into_response()
        }
    }
}
