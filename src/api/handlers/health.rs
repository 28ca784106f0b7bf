//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports process liveness.
///
/// # Endpoint
///
/// `GET /healthcheck`
///
/// Always answers `200 {"status":"ok"}`; it does not probe the database.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
