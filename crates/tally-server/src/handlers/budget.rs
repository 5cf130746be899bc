//! Budget handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Deserialize;

use super::core_error;
use crate::{AppError, AppState, MAX_BODY_SIZE};
use tally_core::models::Budget;

/// Request body for updating the budget
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub monthly_budget: f64,
}

/// GET /api/budget - Get the monthly budget setting
pub async fn get_budget(State(state): State<Arc<AppState>>) -> Result<Json<Budget>, AppError> {
    let budget = state.store.get_budget().map_err(core_error)?;
    Ok(Json(budget))
}

/// POST /api/budget - Update the monthly budget setting
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Budget>, AppError> {
    // Extract JSON body
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: UpdateBudgetRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let budget = state
        .store
        .set_budget(req.monthly_budget)
        .map_err(core_error)?;
    Ok(Json(budget))
}
