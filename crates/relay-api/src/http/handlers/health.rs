//! GET /api/health
//!
//! Liveness only: no provider or credential checks.

use axum::Json;

use relay_types::proxy::HealthStatus;

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
