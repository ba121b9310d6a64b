//! Stock-movement routes.
//!
//! Posting goes through the movement repository, which is the only code
//! path allowed to touch the ledger and the product balance together.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    AppState,
    routes::{error_body, status_from},
};
use stockroom_core::ledger::{LedgerError, MovementDraft, MovementType};
use stockroom_db::entities::movements;
use stockroom_db::repositories::movement::{MovementRepository, MovementWithProduct};
use stockroom_shared::{Paged, Pagination};

/// Creates the movement routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movements", get(list_movements))
        .route("/movements", post(create_movement))
}

/// Query parameters for listing movements.
#[derive(Debug, Deserialize)]
pub struct ListMovementsQuery {
    /// Filter by product.
    pub product_id: Option<Uuid>,
    /// Page number (1-indexed).
    pub page: Option<u64>,
    /// Page size.
    pub per_page: Option<u64>,
}

impl ListMovementsQuery {
    fn pagination(&self) -> Pagination {
        let defaults = Pagination::default();
        Pagination {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        }
    }
}

/// Request body for posting a movement.
#[derive(Debug, Deserialize)]
pub struct CreateMovementRequest {
    /// The product to move.
    pub product_id: Uuid,
    /// Direction: "in" or "out".
    #[serde(rename = "type")]
    pub movement_type: String,
    /// Quantity moved; positive.
    pub quantity: i32,
    /// Reason for the movement.
    pub reason: String,
    /// Optional document reference.
    pub reference: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
    /// Who is recording the movement.
    pub created_by: Option<String>,
}

/// Response for a movement.
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    /// Movement ID.
    pub id: Uuid,
    /// The product moved.
    pub product_id: Uuid,
    /// Direction.
    #[serde(rename = "type")]
    pub movement_type: String,
    /// Quantity moved.
    pub quantity: i32,
    /// Reason.
    pub reason: String,
    /// Document reference.
    pub reference: Option<String>,
    /// Notes.
    pub notes: Option<String>,
    /// Who recorded the movement.
    pub created_by: Option<String>,
    /// Created at timestamp.
    pub created_at: String,
    /// Product name, when listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Product SKU, when listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl From<movements::Model> for MovementResponse {
    fn from(model: movements::Model) -> Self {
        let movement_type: MovementType = model.movement_type.into();
        Self {
            id: model.id,
            product_id: model.product_id,
            movement_type: movement_type.as_str().to_string(),
            quantity: model.quantity,
            reason: model.reason,
            reference: model.reference,
            notes: model.notes,
            created_by: model.created_by,
            created_at: model.created_at.to_rfc3339(),
            product_name: None,
            sku: None,
        }
    }
}

impl From<MovementWithProduct> for MovementResponse {
    fn from(row: MovementWithProduct) -> Self {
        let mut response = Self::from(row.movement);
        response.product_name = row.product_name;
        response.sku = row.sku;
        response
    }
}

fn ledger_error_response(e: &LedgerError) -> (StatusCode, Json<serde_json::Value>) {
    (status_from(e.status_code()), error_body(&e.to_string()))
}

/// GET `/movements` - List movements, newest first, with product details.
async fn list_movements(
    State(state): State<AppState>,
    Query(query): Query<ListMovementsQuery>,
) -> impl IntoResponse {
    let repo = MovementRepository::new((*state.db).clone());
    let pagination = query.pagination();

    match repo.list_movements(query.product_id, pagination).await {
        Ok((movements, total)) => {
            let items: Vec<MovementResponse> =
                movements.into_iter().map(MovementResponse::from).collect();
            (StatusCode::OK, Json(Paged::new(items, pagination, total))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list movements");
            ledger_error_response(&e).into_response()
        }
    }
}

/// POST `/movements` - Post a stock movement.
///
/// Appends a ledger row and adjusts the product balance in one unit of
/// work; on any failure neither write is visible.
async fn create_movement(
    State(state): State<AppState>,
    Json(body): Json<CreateMovementRequest>,
) -> impl IntoResponse {
    let Some(movement_type) = MovementType::parse(&body.movement_type) else {
        return (
            StatusCode::BAD_REQUEST,
            error_body(&format!("Unknown movement type: {}", body.movement_type)),
        )
            .into_response();
    };

    let repo = MovementRepository::new((*state.db).clone());

    match repo
        .post_movement(MovementDraft {
            product_id: body.product_id,
            movement_type,
            quantity: body.quantity,
            reason: body.reason,
            reference: body.reference,
            notes: body.notes,
            created_by: body.created_by,
        })
        .await
    {
        Ok(movement) => {
            (StatusCode::CREATED, Json(MovementResponse::from(movement))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to post movement");
            ledger_error_response(&e).into_response()
        }
    }
}
