//! Expense and income record handlers
//!
//! Both ledgers share the same handler bodies; the route decides the kind.

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    Json,
};

use super::core_error;
use crate::{AppError, AppState, SuccessResponse, MAX_BODY_SIZE};
use tally_core::models::{NewRecord, Record, RecordKind};

/// GET /api/expenses - List all expense records
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, AppError> {
    let records = state
        .store
        .list_records(RecordKind::Expense)
        .map_err(core_error)?;
    Ok(Json(records))
}

/// GET /api/income - List all income records
pub async fn list_income(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Record>>, AppError> {
    let records = state
        .store
        .list_records(RecordKind::Income)
        .map_err(core_error)?;
    Ok(Json(records))
}

/// POST /api/expenses - Create an expense record
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Record>), AppError> {
    create_record(&state, RecordKind::Expense, request).await
}

/// POST /api/income - Create an income record
pub async fn create_income(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Record>), AppError> {
    create_record(&state, RecordKind::Income, request).await
}

async fn create_record(
    state: &AppState,
    kind: RecordKind,
    request: Request,
) -> Result<(StatusCode, Json<Record>), AppError> {
    // Extract JSON body
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let new: NewRecord =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let record = state.store.add_record(kind, new).map_err(core_error)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/expenses/:id - Remove an expense record
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .store
        .delete_record(RecordKind::Expense, id)
        .map_err(core_error)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /api/income/:id - Remove an income record
pub async fn delete_income(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .store
        .delete_record(RecordKind::Income, id)
        .map_err(core_error)?;
    Ok(Json(SuccessResponse { success: true }))
}
