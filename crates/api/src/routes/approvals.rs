//! Approval routes.

use axum::{
    Json, Router,
    extract::State,
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
use stockroom_core::approval::{ApprovalError, Decision};
use stockroom_db::entities::approvals;
use stockroom_db::repositories::approval::{
    ApprovalRepository, ApprovalWithRequest, DecisionInput,
};

/// Creates the approval routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/approvals", get(list_approvals))
        .route("/approvals", post(create_approval))
}

/// Request body for deciding a budget request.
#[derive(Debug, Deserialize)]
pub struct CreateApprovalRequest {
    /// The request to decide.
    pub request_id: Uuid,
    /// The decision: "approved" or "rejected".
    pub decision: String,
    /// Optional remark.
    pub remark: Option<String>,
    /// Name of the approver.
    pub approver_name: String,
}

/// Response for an approval record.
#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    /// Approval ID.
    pub id: Uuid,
    /// The decided request.
    pub request_id: Uuid,
    /// Request number, when listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_no: Option<String>,
    /// The decision taken.
    pub decision: String,
    /// Remark from the approver.
    pub remark: Option<String>,
    /// Name of the approver.
    pub approver_name: String,
    /// When the decision was taken.
    pub created_at: String,
}

impl From<approvals::Model> for ApprovalResponse {
    fn from(model: approvals::Model) -> Self {
        let decision: Decision = model.decision.into();
        Self {
            id: model.id,
            request_id: model.request_id,
            request_no: None,
            decision: decision.as_str().to_string(),
            remark: model.remark,
            approver_name: model.approver_name,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

impl From<ApprovalWithRequest> for ApprovalResponse {
    fn from(row: ApprovalWithRequest) -> Self {
        let mut response = Self::from(row.approval);
        response.request_no = row.request_no;
        response
    }
}

fn approval_error_response(e: &ApprovalError) -> (StatusCode, Json<serde_json::Value>) {
    (status_from(e.status_code()), error_body(&e.to_string()))
}

/// GET `/approvals` - List approvals, newest first, with request numbers.
async fn list_approvals(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ApprovalRepository::new((*state.db).clone());

    match repo.list_approvals().await {
        Ok(approvals) => {
            let items: Vec<ApprovalResponse> =
                approvals.into_iter().map(ApprovalResponse::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list approvals");
            approval_error_response(&e).into_response()
        }
    }
}

/// POST `/approvals` - Decide a pending budget request.
///
/// The status change and the approval record are one unit of work; a
/// request already decided is rejected with a conflict.
async fn create_approval(
    State(state): State<AppState>,
    Json(body): Json<CreateApprovalRequest>,
) -> impl IntoResponse {
    let Some(decision) = Decision::parse(&body.decision) else {
        return approval_error_response(&ApprovalError::UnknownDecision(body.decision))
            .into_response();
    };

    let repo = ApprovalRepository::new((*state.db).clone());

    match repo
        .decide_request(DecisionInput {
            request_id: body.request_id,
            decision,
            approver_name: body.approver_name,
            remark: body.remark,
        })
        .await
    {
        Ok((_, approval)) => {
            (StatusCode::CREATED, Json(ApprovalResponse::from(approval))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create approval");
            approval_error_response(&e).into_response()
        }
    }
}
