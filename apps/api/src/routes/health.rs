use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// Liveness only. The completion endpoint is not probed.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
