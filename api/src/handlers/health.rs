//! Health probe

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
