//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /health - Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Tally API is running",
    })
}
