//! Handlers for URL management endpoints (create, update, delete, list).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create_url::CreateUrlRequest;
use crate::api::dto::list_urls::{ListUrlsResponse, UrlListItem};
use crate::api::dto::pagination::ListQueryParams;
use crate::api::dto::update_url::UpdateUrlRequest;
use crate::api::dto::url_record::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_path": "promo",        // optional, taken verbatim
///   "expires_in_days": 30         // optional, fractional allowed
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the short path is already taken.
pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlRecord>), AppError> {
    payload.validate()?;

    let base_url = request_base_url(&headers)?;

    let url = state
        .url_service
        .create_short_url(
            payload.original_url,
            payload.short_path,
            payload.expires_in_days,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UrlRecord::from_entity(url, &base_url)),
    ))
}

/// Replaces the destination of an existing short URL.
///
/// # Endpoint
///
/// `PUT /api/urls/{short_path}`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the short path doesn't exist.
pub async fn update_url_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlRecord>, AppError> {
    payload.validate()?;

    let base_url = request_base_url(&headers)?;

    let url = state
        .url_service
        .update_original_url(&short_path, payload.original_url)
        .await?;

    Ok(Json(UrlRecord::from_entity(url, &base_url)))
}

/// Deletes a short URL and its access logs.
///
/// # Endpoint
///
/// `DELETE /api/urls/{short_path}`
///
/// # Errors
///
/// Returns 404 Not Found if the short path doesn't exist.
pub async fn delete_url_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete_short_url(&short_path).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists short URLs newest-first with pagination.
///
/// # Endpoint
///
/// `GET /api/urls?page=&per_page=`
///
/// `page` defaults to 1, `per_page` to 100 (max 100). `total_items` always
/// reflects the full row count.
///
/// # Errors
///
/// Returns 400 Bad Request for out-of-range pagination parameters.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<ListUrlsResponse>, AppError> {
    let (page, per_page) = params
        .validate_and_resolve()
        .map_err(|msg| AppError::bad_request(msg, json!({ "fields": ["page", "per_page"] })))?;

    let base_url = request_base_url(&headers)?;

    let (total_items, urls) = state.url_service.list_urls(page, per_page).await?;

    let items = urls
        .into_iter()
        .map(|url| UrlListItem::from_entity(url, &base_url))
        .collect();

    Ok(Json(ListUrlsResponse {
        total_items,
        page,
        per_page,
        items,
    }))
}
