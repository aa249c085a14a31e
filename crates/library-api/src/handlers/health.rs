//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /health/ready
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<ReadinessResponse>> {
    let connected = state.db_pool.health_check().await.unwrap_or(false);

    Json(ApiResponse::ok(ReadinessResponse {
        status: if connected { "ok" } else { "degraded" }.to_string(),
        database: if connected { "connected" } else { "unavailable" }.to_string(),
    }))
}
