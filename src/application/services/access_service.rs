//! Redirect recording and access statistics service.

use std::sync::Arc;

use crate::domain::entities::{AccessLog, ShortUrl};
use crate::domain::repositories::{AccessLogRepository, AccessOutcome, UrlRepository};
use crate::error::AppError;
use chrono::{Duration, Utc};
use serde_json::json;

/// How many recent log entries a stats response carries.
pub const RECENT_ACCESS_LIMIT: i64 = 10;

/// Width of the rolling access-count window, in days.
pub const STATS_WINDOW_DAYS: i64 = 30;

/// Aggregated access statistics for one short URL.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub url: ShortUrl,
    pub total_accesses: i64,
    pub accesses_last_30_days: i64,
    pub recent: Vec<AccessLog>,
}

/// Service owning the `access_logs` entity: appends a record on every
/// successful redirect and aggregates counts and recent entries.
pub struct AccessService<U: UrlRepository, A: AccessLogRepository> {
    urls: Arc<U>,
    logs: Arc<A>,
}

impl<U: UrlRepository, A: AccessLogRepository> AccessService<U, A> {
    /// Creates a new access service.
    pub fn new(urls: Arc<U>, logs: Arc<A>) -> Self {
        Self { urls, logs }
    }

    /// Resolves a token, records the visit, and returns the destination URL.
    ///
    /// The lookup, expiry check, and log insert run as one locked
    /// transaction inside the repository; this method maps outcomes onto
    /// the error taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token does not exist.
    /// Returns [`AppError::Gone`] if the row is past its expiry.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_access(
        &self,
        short_path: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<String, AppError> {
        match self
            .logs
            .record_access(short_path, ip_address, user_agent)
            .await?
        {
            None => Err(AppError::not_found(
                "Short URL not found",
                json!({ "short_path": short_path }),
            )),
            Some(AccessOutcome::Expired) => Err(AppError::gone(
                "Short URL expired",
                json!({ "short_path": short_path }),
            )),
            Some(AccessOutcome::Redirected { original_url }) => Ok(original_url),
        }
    }

    /// Returns aggregated statistics for a token.
    ///
    /// Expired rows still report stats; only redirects refuse them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, short_path: &str) -> Result<UrlStats, AppError> {
        let url = self
            .urls
            .find_by_short_path(short_path)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_path": short_path }))
            })?;

        let total_accesses = self.logs.count_accesses(url.id, None).await?;

        let window_start = Utc::now() - Duration::days(STATS_WINDOW_DAYS);
        let accesses_last_30_days = self.logs.count_accesses(url.id, Some(window_start)).await?;

        let recent = self.logs.recent_accesses(url.id, RECENT_ACCESS_LIMIT).await?;

        Ok(UrlStats {
            url,
            total_accesses,
            accesses_last_30_days,
            recent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockAccessLogRepository, MockUrlRepository};

    fn sample_url(id: i64, short_path: &str) -> ShortUrl {
        let now = Utc::now();
        ShortUrl {
            id,
            original_url: "https://example.com".to_string(),
            short_path: short_path.to_string(),
            created_at: now,
            updated_at: now,
            expires_at: None,
        }
    }

    fn sample_log(id: i64, url_id: i64) -> AccessLog {
        AccessLog {
            id,
            url_id,
            accessed_at: Utc::now(),
            ip_address: Some("10.0.0.1".to_string()),
            user_agent: Some("curl/8.0".to_string()),
        }
    }

    #[tokio::test]
    async fn test_record_access_returns_destination() {
        let urls = MockUrlRepository::new();
        let mut logs = MockAccessLogRepository::new();

        logs.expect_record_access()
            .withf(|p, ip, ua| {
                p == "abc123" && ip.as_deref() == Some("10.0.0.1") && ua.is_none()
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(Some(AccessOutcome::Redirected {
                    original_url: "https://example.com".to_string(),
                }))
            });

        let service = AccessService::new(Arc::new(urls), Arc::new(logs));
        let destination = service
            .record_access("abc123", Some("10.0.0.1".to_string()), None)
            .await
            .unwrap();

        assert_eq!(destination, "https://example.com");
    }

    #[tokio::test]
    async fn test_record_access_unknown_token_is_not_found() {
        let urls = MockUrlRepository::new();
        let mut logs = MockAccessLogRepository::new();

        logs.expect_record_access()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let service = AccessService::new(Arc::new(urls), Arc::new(logs));
        let err = service
            .record_access("missing", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_access_expired_token_is_gone() {
        let urls = MockUrlRepository::new();
        let mut logs = MockAccessLogRepository::new();

        logs.expect_record_access()
            .times(1)
            .returning(|_, _, _| Ok(Some(AccessOutcome::Expired)));

        let service = AccessService::new(Arc::new(urls), Arc::new(logs));
        let err = service
            .record_access("stale1", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Gone { .. }));
    }

    #[tokio::test]
    async fn test_get_stats_composes_counts_and_recent() {
        let mut urls = MockUrlRepository::new();
        let mut logs = MockAccessLogRepository::new();

        urls.expect_find_by_short_path()
            .withf(|p| p == "abc123")
            .times(1)
            .returning(|p| Ok(Some(sample_url(7, p))));

        logs.expect_count_accesses()
            .withf(|url_id, since| *url_id == 7 && since.is_none())
            .times(1)
            .returning(|_, _| Ok(25));

        logs.expect_count_accesses()
            .withf(|url_id, since| *url_id == 7 && since.is_some())
            .times(1)
            .returning(|_, _| Ok(4));

        logs.expect_recent_accesses()
            .withf(|url_id, limit| *url_id == 7 && *limit == RECENT_ACCESS_LIMIT)
            .times(1)
            .returning(|url_id, _| Ok(vec![sample_log(2, url_id), sample_log(1, url_id)]));

        let service = AccessService::new(Arc::new(urls), Arc::new(logs));
        let stats = service.get_stats("abc123").await.unwrap();

        assert_eq!(stats.total_accesses, 25);
        assert_eq!(stats.accesses_last_30_days, 4);
        assert_eq!(stats.recent.len(), 2);
        assert!(stats.total_accesses >= stats.accesses_last_30_days);
    }

    #[tokio::test]
    async fn test_get_stats_unknown_token_is_not_found() {
        let mut urls = MockUrlRepository::new();
        let logs = MockAccessLogRepository::new();

        urls.expect_find_by_short_path()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccessService::new(Arc::new(urls), Arc::new(logs));
        let err = service.get_stats("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
