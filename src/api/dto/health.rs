//! DTO for the healthcheck endpoint.

use serde::Serialize;

/// Response body for `GET /healthcheck`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
