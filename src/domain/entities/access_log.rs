//! AccessLog entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// One recorded visit to a short URL.
///
/// Client fields are optional; a redirect without a resolvable peer address
/// or User-Agent header is still logged.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccessLog {
    pub id: i64,
    pub url_id: i64,
    pub accessed_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
