//! DTOs for the paginated listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// One row of the paginated listing.
///
/// Carries both the absolute short URL and the absolute stats URL so a
/// client can navigate without building paths itself.
#[derive(Debug, Serialize)]
pub struct UrlListItem {
    pub id: i64,
    pub original_url: String,
    pub short_path: String,
    pub short_url: String,
    pub stats_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UrlListItem {
    pub fn from_entity(url: ShortUrl, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');

        Self {
            short_url: format!("{}/{}", base, url.short_path),
            stats_url: format!("{}/api/urls/{}/stats", base, url.short_path),
            id: url.id,
            original_url: url.original_url,
            short_path: url.short_path,
            created_at: url.created_at,
            expires_at: url.expires_at,
        }
    }
}

/// Response body for `GET /api/urls`.
///
/// `total_items` counts every stored row regardless of the requested page.
#[derive(Debug, Serialize)]
pub struct ListUrlsResponse {
    pub total_items: i64,
    pub page: i64,
    pub per_page: i64,
    pub items: Vec<UrlListItem>,
}
