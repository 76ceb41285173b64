use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::AppState;
use crate::api::types::HealthResponse;

/// GET /v1/readiness - pings the store
pub async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.store_probe.check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::new("ok"))),
        Err(e) => {
            tracing::warn!(error = ?e, "readiness check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::new("db not ready")),
            )
        }
    }
}

/// GET /v1/liveness
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
