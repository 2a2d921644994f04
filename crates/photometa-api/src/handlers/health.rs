//! Health check handler.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Health probe response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Configured vision model, when one is available.
    pub vision_model: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Report service liveness and vision model availability.
#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service is healthy")))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        vision_model: state.vision.as_ref().map(|b| b.model_name().to_string()),
        timestamp: chrono::Utc::now(),
    })
}
