//! PostgreSQL implementation of the access log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::AccessLog;
use crate::domain::repositories::{AccessLogRepository, AccessOutcome};
use crate::error::AppError;

/// PostgreSQL repository for redirect recording and access history.
pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
}

impl PgAccessLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn record_access(
        &self,
        short_path: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Option<AccessOutcome>, AppError> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE serializes concurrent redirects on one token and keeps
        // the expiry check consistent with a racing delete.
        let row = sqlx::query_as::<_, (i64, String, Option<DateTime<Utc>>)>(
            r#"
            SELECT id, original_url, expires_at
            FROM urls
            WHERE short_path = $1
            FOR UPDATE
            "#,
        )
        .bind(short_path)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((url_id, original_url, expires_at)) = row else {
            tx.commit().await?;
            return Ok(None);
        };

        if expires_at.is_some_and(|e| e < Utc::now()) {
            // Expired rows commit the no-op read; nothing is logged.
            tx.commit().await?;
            return Ok(Some(AccessOutcome::Expired));
        }

        let log_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO access_logs (url_id, ip_address, user_agent)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(url_id)
        .bind(&ip_address)
        .bind(&user_agent)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(log_id, short_path, "access recorded");

        Ok(Some(AccessOutcome::Redirected { original_url }))
    }

    async fn count_accesses(
        &self,
        url_id: i64,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM access_logs
            WHERE url_id = $1
              AND ($2::timestamptz IS NULL OR accessed_at >= $2)
            "#,
        )
        .bind(url_id)
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn recent_accesses(&self, url_id: i64, limit: i64) -> Result<Vec<AccessLog>, AppError> {
        let logs = sqlx::query_as::<_, AccessLog>(
            r#"
            SELECT id, url_id, accessed_at, ip_address, user_agent
            FROM access_logs
            WHERE url_id = $1
            ORDER BY accessed_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(url_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(logs)
    }
}
