//! DTOs for the per-URL statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::UrlStats;
use crate::domain::entities::AccessLog;

/// One access log entry in a stats payload.
///
/// `accessed_at` serializes as RFC 3339 with an explicit UTC offset.
#[derive(Debug, Serialize)]
pub struct AccessLogEntry {
    pub accessed_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl From<AccessLog> for AccessLogEntry {
    fn from(log: AccessLog) -> Self {
        Self {
            accessed_at: log.accessed_at,
            ip_address: log.ip_address,
            user_agent: log.user_agent,
        }
    }
}

/// Response body for `GET /api/urls/{short_path}/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_url: String,
    pub original_url: String,
    pub total_accesses: i64,
    pub accesses_last_30_days: i64,
    pub access_logs: Vec<AccessLogEntry>,
}

impl StatsResponse {
    pub fn from_stats(stats: UrlStats, base_url: &str) -> Self {
        let short_url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            stats.url.short_path
        );

        Self {
            short_url,
            original_url: stats.url.original_url,
            total_accesses: stats.total_accesses,
            accesses_last_30_days: stats.accesses_last_30_days,
            access_logs: stats.recent.into_iter().map(AccessLogEntry::from).collect(),
        }
    }
}
