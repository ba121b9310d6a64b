//! API route definitions.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::AppState;
use stockroom_shared::AppError;

pub mod account_codes;
pub mod approvals;
pub mod budget_requests;
pub mod categories;
pub mod health;
pub mod movements;
pub mod products;
pub mod suppliers;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(categories::routes())
        .merge(suppliers::routes())
        .merge(products::routes())
        .merge(account_codes::routes())
        .merge(movements::routes())
        .merge(budget_requests::routes())
        .merge(approvals::routes())
}

/// Builds the `{"error": message}` response body used across all routes.
pub(crate) fn error_body(message: &str) -> Json<Value> {
    Json(json!({ "error": message }))
}

/// Maps a numeric status (as reported by domain errors) to a `StatusCode`.
pub(crate) fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Renders an [`AppError`] as status code plus `{"error": message}` body.
pub(crate) fn app_error_response(e: &AppError) -> (StatusCode, Json<Value>) {
    (status_from(e.status_code()), error_body(&e.to_string()))
}
