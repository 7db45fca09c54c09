use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// GET /api
/// Liveness probe
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { message: "It works" })
}
