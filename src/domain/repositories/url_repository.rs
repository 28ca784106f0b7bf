//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short URLs.
///
/// Provides CRUD operations and pagination over the `urls` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new short URL.
    ///
    /// The `short_path` UNIQUE constraint is the authoritative guard: a
    /// racing create that passed the service-level pre-check still fails
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_path` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a short URL by its token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_path(&self, short_path: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Updates `original_url` (and bumps `updated_at`) for the given token.
    ///
    /// Returns `Ok(None)` if no row matches `short_path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_original_url(
        &self,
        short_path: &str,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Deletes a short URL and all of its access logs in one transaction.
    ///
    /// Returns `Ok(true)` if the row existed and was deleted, `Ok(false)` if
    /// not found. A failure mid-sequence rolls the whole transaction back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, short_path: &str) -> Result<bool, AppError>;

    /// Lists short URLs ordered by `created_at` descending.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: i64, per_page: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts all short URLs, expired rows included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
