use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Service health check
///
/// GET /api/v1/health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 500, description = "Database unreachable")
    ),
    tag = "System"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    match state.db.health_check().await {
        Ok(()) => ok(HealthResponse {
            status: "ok",
            database: "up",
        }),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            ApiError::internal("database unreachable").into_err()
        }
    }
}
