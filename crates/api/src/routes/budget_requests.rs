//! Budget-request routes.
//!
//! The status endpoint delegates to the same decision unit of work as the
//! approvals endpoint, so a status change always produces its approval
//! record; no caller can flip a request's status on its own.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    AppState,
    routes::{approvals::ApprovalResponse, error_body, status_from},
};
use stockroom_core::approval::{ApprovalError, ApprovalService, RequestStatus};
use stockroom_core::budget::{BudgetError, MaterialItem, RequestDraft};
use stockroom_db::entities::budget_requests;
use stockroom_db::repositories::approval::{ApprovalRepository, DecisionInput};
use stockroom_db::BudgetRequestRepository;

/// Creates the budget-request routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budget-requests", get(list_requests))
        .route("/budget-requests", post(create_request))
        .route("/budget-requests/{id}", delete(delete_request))
        .route("/budget-requests/{id}/status", put(update_status))
}

/// Request body for creating a budget request.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequestRequest {
    /// Who is asking for the funds.
    pub requester: String,
    /// Date of the request (YYYY-MM-DD); defaults to today.
    pub request_date: Option<NaiveDate>,
    /// Account code the spend is booked against.
    pub account_code: String,
    /// Account name matching the code.
    pub account_name: String,
    /// Requested amount.
    pub amount: Decimal,
    /// Optional note.
    pub note: Option<String>,
    /// Materials the funds are for.
    #[serde(default)]
    pub material_list: Vec<MaterialItem>,
}

/// Request body for the status endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status: APPROVED or REJECTED.
    pub status: String,
    /// Name of the approver taking the decision.
    pub approver_name: Option<String>,
    /// Optional remark.
    pub remark: Option<String>,
}

/// Response for a budget request.
#[derive(Debug, Serialize)]
pub struct BudgetRequestResponse {
    /// Request ID.
    pub id: Uuid,
    /// Request number.
    pub request_no: String,
    /// Requester.
    pub requester: String,
    /// Request date.
    pub request_date: NaiveDate,
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Requested amount.
    pub amount: Decimal,
    /// Note.
    pub note: Option<String>,
    /// Material list.
    pub material_list: serde_json::Value,
    /// Workflow status.
    pub status: String,
    /// Created at timestamp.
    pub created_at: String,
}

impl From<budget_requests::Model> for BudgetRequestResponse {
    fn from(model: budget_requests::Model) -> Self {
        let status: RequestStatus = model.status.into();
        Self {
            id: model.id,
            request_no: model.request_no,
            requester: model.requester,
            request_date: model.request_date,
            account_code: model.account_code,
            account_name: model.account_name,
            amount: model.amount,
            note: model.note,
            material_list: model.material_list,
            status: status.as_str().to_string(),
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

fn budget_error_response(e: &BudgetError) -> (StatusCode, Json<serde_json::Value>) {
    (status_from(e.status_code()), error_body(&e.to_string()))
}

fn approval_error_response(e: &ApprovalError) -> (StatusCode, Json<serde_json::Value>) {
    (status_from(e.status_code()), error_body(&e.to_string()))
}

/// GET `/budget-requests` - List budget requests, newest first.
async fn list_requests(State(state): State<AppState>) -> impl IntoResponse {
    let repo = BudgetRequestRepository::new((*state.db).clone());

    match repo.list_requests().await {
        Ok(requests) => {
            let items: Vec<BudgetRequestResponse> = requests
                .into_iter()
                .map(BudgetRequestResponse::from)
                .collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list budget requests");
            budget_error_response(&e).into_response()
        }
    }
}

/// POST `/budget-requests` - Create a budget request.
///
/// The request number is allocated server-side from the per-year counter;
/// callers never pick their own.
async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<CreateBudgetRequestRequest>,
) -> impl IntoResponse {
    let repo = BudgetRequestRepository::new((*state.db).clone());

    match repo
        .create_request(RequestDraft {
            requester: body.requester,
            request_date: body.request_date.unwrap_or_else(|| Utc::now().date_naive()),
            account_code: body.account_code,
            account_name: body.account_name,
            amount: body.amount,
            note: body.note,
            material_list: body.material_list,
        })
        .await
    {
        Ok(request) => (
            StatusCode::CREATED,
            Json(BudgetRequestResponse::from(request)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to create budget request");
            budget_error_response(&e).into_response()
        }
    }
}

/// PUT `/budget-requests/{id}/status` - Decide a pending request.
///
/// Runs the same unit of work as `POST /approvals`: the status change and
/// the approval record commit together or not at all.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    let Some(target) = RequestStatus::parse(&body.status) else {
        return approval_error_response(&ApprovalError::UnknownStatus(body.status)).into_response();
    };
    let decision = match ApprovalService::decision_for_target(target) {
        Ok(decision) => decision,
        Err(e) => return approval_error_response(&e).into_response(),
    };

    let repo = ApprovalRepository::new((*state.db).clone());

    match repo
        .decide_request(DecisionInput {
            request_id: id,
            decision,
            approver_name: body.approver_name.unwrap_or_default(),
            remark: body.remark,
        })
        .await
    {
        Ok((request, approval)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "request": BudgetRequestResponse::from(request),
                "approval": ApprovalResponse::from(approval),
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update budget request status");
            approval_error_response(&e).into_response()
        }
    }
}

/// DELETE `/budget-requests/{id}` - Delete a request still in PENDING.
async fn delete_request(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = BudgetRequestRepository::new((*state.db).clone());

    match repo.delete_request(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete budget request");
            budget_error_response(&e).into_response()
        }
    }
}
