//! Account-code lookup routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::{AppState, routes::app_error_response};
use stockroom_shared::AppError;
use stockroom_db::AccountCodeRepository;

/// Response for an account code.
#[derive(Debug, Serialize)]
pub struct AccountCodeResponse {
    /// Account code ID.
    pub id: Uuid,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
}

/// GET `/account-codes` - List account codes, code-ordered.
async fn list_account_codes(State(state): State<AppState>) -> impl IntoResponse {
    let repo = AccountCodeRepository::new((*state.db).clone());

    match repo.list_account_codes().await {
        Ok(codes) => {
            let items: Vec<AccountCodeResponse> = codes
                .into_iter()
                .map(|c| AccountCodeResponse {
                    id: c.id,
                    code: c.code,
                    name: c.name,
                })
                .collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list account codes");
            app_error_response(&AppError::Database(e.to_string())).into_response()
        }
    }
}

/// Creates the account-code routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/account-codes", get(list_account_codes))
}
