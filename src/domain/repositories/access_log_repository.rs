//! Repository trait for access logging and per-URL statistics.

use crate::domain::entities::AccessLog;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of a locked redirect attempt against an existing short URL.
///
/// `None` from [`AccessLogRepository::record_access`] means the token does
/// not exist; the service layer translates outcomes into the error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The row is past its expiry; nothing was logged.
    Expired,
    /// One access log row was written; carries the stored destination URL.
    Redirected { original_url: String },
}

/// Repository interface for recording redirects and reading access history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccessLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_access_log.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Atomically resolves a token and records the visit.
    ///
    /// Runs in one transaction: lock-read the `urls` row (`FOR UPDATE`),
    /// check expiry, insert the log row, commit. Concurrent redirects on the
    /// same token serialize on the row lock, and the expiry check cannot
    /// interleave with a concurrent delete of the row. An expired row
    /// commits the no-op read and writes nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` if the token does not exist
    /// - `Ok(Some(AccessOutcome::Expired))` if past expiry (no log written)
    /// - `Ok(Some(AccessOutcome::Redirected { .. }))` on success
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; the transaction is
    /// rolled back and no partial access is recorded.
    async fn record_access(
        &self,
        short_path: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Option<AccessOutcome>, AppError>;

    /// Counts access logs for a URL, optionally only those at or after `since`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_accesses(
        &self,
        url_id: i64,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError>;

    /// Returns the most recent access logs for a URL, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent_accesses(&self, url_id: i64, limit: i64) -> Result<Vec<AccessLog>, AppError>;
}
