use axum::Json;
use serde::Serialize;

/// Liveness probe for load balancers; no authentication.
pub async fn health() -> Json<HealthResponseData> {
    Json(HealthResponseData {
        status: "ok".to_string(),
        message: "Service is up and running".to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: String,
    pub message: String,
}
