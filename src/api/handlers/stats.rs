//! Handler for per-URL access statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Returns access statistics for a short URL.
///
/// # Endpoint
///
/// `GET /api/urls/{short_path}/stats`
///
/// The payload carries the total access count, the count over the last 30
/// days, and the 10 most recent log entries, newest first. Expired URLs
/// still report stats.
///
/// # Errors
///
/// Returns 404 Not Found if the short path doesn't exist.
pub async fn stats_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let base_url = request_base_url(&headers)?;

    let stats = state.access_service.get_stats(&short_path).await?;

    Ok(Json(StatsResponse::from_stats(stats, &base_url)))
}
