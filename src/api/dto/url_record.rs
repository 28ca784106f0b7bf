//! JSON representation of a short URL record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// Full record returned by the create and update endpoints.
#[derive(Debug, Serialize)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_path: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Builds the response record, deriving the absolute short URL from the
    /// request's own base address.
    pub fn from_entity(url: ShortUrl, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), url.short_path);

        Self {
            id: url.id,
            original_url: url.original_url,
            short_path: url.short_path,
            short_url,
            created_at: url.created_at,
            updated_at: url.updated_at,
            expires_at: url.expires_at,
        }
    }
}
