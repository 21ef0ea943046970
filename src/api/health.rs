//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    /// Always "ok" when the service answers
    pub service: String,
    /// "ok" or "error" depending on the database ping
    pub database: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Service and database status
#[utoipa::path(
    get,
    path = "/status",
    tag = "system",
    responses(
        (status = 200, description = "Service and database are up", body = StatusResponse),
        (status = 503, description = "Database is unreachable", body = StatusResponse)
    )
)]
pub async fn system_status(State(state): State<AppState>) -> (StatusCode, Json<StatusResponse>) {
    let (status, database) = if state.services.system.database_available().await {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "error")
    };

    (
        status,
        Json(StatusResponse {
            service: "ok".to_string(),
            database: database.to_string(),
        }),
    )
}
