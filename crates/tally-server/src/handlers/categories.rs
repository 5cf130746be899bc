//! Category handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Deserialize;

use super::core_error;
use crate::{AppError, AppState, SuccessResponse, MAX_BODY_SIZE};
use tally_core::models::{Categories, RecordKind};

/// Request body for adding or removing a category
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    /// Ledger kind: "expense" or "income"
    pub kind: String,
    pub name: String,
}

/// GET /api/categories - List both category sets
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Categories>, AppError> {
    let categories = state.store.list_categories().map_err(core_error)?;
    Ok(Json(categories))
}

/// POST /api/categories - Add a category name
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Categories>, AppError> {
    let req = category_request(request).await?;
    let kind = parse_kind(&req.kind)?;

    let categories = state
        .store
        .add_category(kind, &req.name)
        .map_err(core_error)?;
    Ok(Json(categories))
}

/// DELETE /api/categories - Remove a category name
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<SuccessResponse>, AppError> {
    let req = category_request(request).await?;
    let kind = parse_kind(&req.kind)?;

    state
        .store
        .remove_category(kind, &req.name)
        .map_err(core_error)?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn category_request(request: Request) -> Result<CategoryRequest, AppError> {
    // Extract JSON body
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))
}

fn parse_kind(kind: &str) -> Result<RecordKind, AppError> {
    kind.parse::<RecordKind>()
        .map_err(|e| AppError::bad_request(&e))
}
