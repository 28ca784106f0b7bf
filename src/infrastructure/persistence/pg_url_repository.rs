//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Single-row
/// operations run as one statement; the cascade delete runs in an explicit
/// transaction.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let url = sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO urls (original_url, short_path, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_path, created_at, updated_at, expires_at
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_path)
        .bind(new_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn find_by_short_path(&self, short_path: &str) -> Result<Option<ShortUrl>, AppError> {
        let url = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, original_url, short_path, created_at, updated_at, expires_at
            FROM urls
            WHERE short_path = $1
            "#,
        )
        .bind(short_path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn update_original_url(
        &self,
        short_path: &str,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let url = sqlx::query_as::<_, ShortUrl>(
            r#"
            UPDATE urls
            SET original_url = $2, updated_at = now()
            WHERE short_path = $1
            RETURNING id, original_url, short_path, created_at, updated_at, expires_at
            "#,
        )
        .bind(short_path)
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn delete(&self, short_path: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let url_id = sqlx::query_scalar::<_, i64>("SELECT id FROM urls WHERE short_path = $1")
            .bind(short_path)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(url_id) = url_id else {
            return Ok(false);
        };

        // Owned logs first: no FK orphans, and a failure anywhere rolls the
        // whole unit back when `tx` drops.
        sqlx::query("DELETE FROM access_logs WHERE url_id = $1")
            .bind(url_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM urls WHERE id = $1")
            .bind(url_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }

    async fn list(&self, page: i64, per_page: i64) -> Result<Vec<ShortUrl>, AppError> {
        let offset = (page - 1) * per_page;

        let urls = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, original_url, short_path, created_at, updated_at, expires_at
            FROM urls
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(per_page)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(urls)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
