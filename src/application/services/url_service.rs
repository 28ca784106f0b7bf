//! Short URL creation, mutation, and listing service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::token::generate_short_path;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

/// Service owning the `urls` entity: create with collision-checked token
/// assignment and optional expiry, update, delete with cascade, and
/// paginated listing.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL.
    ///
    /// # Token assignment
    ///
    /// - A caller-supplied `short_path` is taken as-is after a uniqueness
    ///   pre-check; a taken token is a conflict.
    /// - Otherwise a random 6-character token is generated, retrying a
    ///   bounded number of times on pre-check collision.
    ///
    /// Either way the `short_path` UNIQUE constraint stays authoritative:
    /// two creates racing past the pre-check resolve to one success and one
    /// [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `expires_in_days` is out of range.
    /// Returns [`AppError::Conflict`] if the token is already taken.
    /// Returns [`AppError::Internal`] on database errors or retry exhaustion.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_path: Option<String>,
        expires_in_days: Option<f64>,
    ) -> Result<ShortUrl, AppError> {
        let expires_at = expires_in_days.map(expiry_from_days).transpose()?;

        let short_path = if let Some(custom) = custom_path {
            // Accepted as-is; only uniqueness is checked.
            if self
                .repository
                .find_by_short_path(&custom)
                .await?
                .is_some()
            {
                return Err(AppError::conflict(
                    "Short path already in use",
                    json!({ "short_path": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_short_path().await?
        };

        let new_url = NewShortUrl {
            original_url,
            short_path,
            expires_at,
        };

        self.repository.create(new_url).await
    }

    /// Replaces the destination URL of an existing short URL.
    ///
    /// Only `original_url` and `updated_at` change; the token is immutable
    /// after creation. Expired rows remain updatable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches `short_path`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_original_url(
        &self,
        short_path: &str,
        original_url: String,
    ) -> Result<ShortUrl, AppError> {
        self.repository
            .update_original_url(short_path, &original_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_path": short_path }))
            })
    }

    /// Deletes a short URL together with all of its access logs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches `short_path`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_short_url(&self, short_path: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(short_path).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "short_path": short_path }),
            ));
        }

        Ok(())
    }

    /// Lists short URLs newest-first with the total row count.
    ///
    /// The count covers every row, expired ones included, independent of the
    /// requested page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_urls(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(i64, Vec<ShortUrl>), AppError> {
        let total_items = self.repository.count().await?;
        let items = self.repository.list(page, per_page).await?;

        Ok((total_items, items))
    }

    /// Generates a free short token with bounded collision retry.
    async fn generate_unique_short_path(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = generate_short_path();

            if self
                .repository
                .find_by_short_path(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short path",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Turns a day count into an absolute expiry timestamp.
///
/// Fractional and negative values are accepted; a negative count produces an
/// already-expired row.
fn expiry_from_days(days: f64) -> Result<DateTime<Utc>, AppError> {
    let seconds = (days * 86_400.0) as i64;

    let delta = Duration::try_seconds(seconds).ok_or_else(|| {
        AppError::bad_request("expires_in_days out of range", json!({ "value": days }))
    })?;

    Utc::now().checked_add_signed(delta).ok_or_else(|| {
        AppError::bad_request("expires_in_days out of range", json!({ "value": days }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    fn sample_url(id: i64, short_path: &str, original_url: &str) -> ShortUrl {
        let now = Utc::now();
        ShortUrl {
            id,
            original_url: original_url.to_string(),
            short_path: short_path.to_string(),
            created_at: now,
            updated_at: now,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_with_custom_path() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_short_path()
            .withf(|p| p == "promo")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|n| n.short_path == "promo" && n.original_url == "https://example.com")
            .times(1)
            .returning(|n| {
                let mut url = sample_url(1, "promo", "https://example.com");
                url.expires_at = n.expires_at;
                Ok(url)
            });

        let service = UrlService::new(Arc::new(repo));
        let url = service
            .create_short_url("https://example.com".to_string(), Some("promo".to_string()), None)
            .await
            .unwrap();

        assert_eq!(url.short_path, "promo");
        assert!(url.expires_at.is_none());
    }

    #[tokio::test]
    async fn test_create_with_taken_custom_path_is_conflict() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_short_path()
            .times(1)
            .returning(|_| Ok(Some(sample_url(1, "promo", "https://a.com"))));

        repo.expect_create().times(0);

        let service = UrlService::new(Arc::new(repo));
        let err = service
            .create_short_url("https://b.com".to_string(), Some("promo".to_string()), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_generates_six_char_token() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_short_path()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|n| {
                n.short_path.len() == 6
                    && n.short_path
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            })
            .times(1)
            .returning(|n| Ok(sample_url(1, &n.short_path, &n.original_url)));

        let service = UrlService::new(Arc::new(repo));
        let url = service
            .create_short_url("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(url.short_path.len(), 6);
    }

    #[tokio::test]
    async fn test_create_retries_generated_collision() {
        let mut repo = MockUrlRepository::new();
        let mut calls = 0;

        repo.expect_find_by_short_path()
            .times(2)
            .returning(move |p| {
                calls += 1;
                if calls == 1 {
                    Ok(Some(sample_url(9, p, "https://taken.com")))
                } else {
                    Ok(None)
                }
            });

        repo.expect_create()
            .times(1)
            .returning(|n| Ok(sample_url(2, &n.short_path, &n.original_url)));

        let service = UrlService::new(Arc::new(repo));
        let result = service
            .create_short_url("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_gives_up_after_too_many_collisions() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_short_path()
            .times(10)
            .returning(|p| Ok(Some(sample_url(9, p, "https://taken.com"))));

        repo.expect_create().times(0);

        let service = UrlService::new(Arc::new(repo));
        let err = service
            .create_short_url("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_with_negative_expiry_is_already_expired() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_short_path()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|n| n.expires_at.is_some_and(|e| e < Utc::now()))
            .times(1)
            .returning(|n| {
                let mut url = sample_url(1, &n.short_path, &n.original_url);
                url.expires_at = n.expires_at;
                Ok(url)
            });

        let service = UrlService::new(Arc::new(repo));
        let url = service
            .create_short_url("https://example.com".to_string(), None, Some(-1.0))
            .await
            .unwrap();

        assert!(url.is_expired());
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut repo = MockUrlRepository::new();

        repo.expect_update_original_url()
            .withf(|p, u| p == "abc123" && u == "https://new.com")
            .times(1)
            .returning(|p, u| Ok(Some(sample_url(1, p, u))));

        let service = UrlService::new(Arc::new(repo));
        let url = service
            .update_original_url("abc123", "https://new.com".to_string())
            .await
            .unwrap();

        assert_eq!(url.original_url, "https://new.com");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockUrlRepository::new();

        repo.expect_update_original_url()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UrlService::new(Arc::new(repo));
        let err = service
            .update_original_url("missing", "https://new.com".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete()
            .withf(|p| p == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        let service = UrlService::new(Arc::new(repo));
        assert!(service.delete_short_url("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockUrlRepository::new();

        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = UrlService::new(Arc::new(repo));
        let err = service.delete_short_url("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_returns_total_and_items() {
        let mut repo = MockUrlRepository::new();

        repo.expect_count().times(1).returning(|| Ok(12));
        repo.expect_list()
            .withf(|page, per_page| *page == 2 && *per_page == 5)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    sample_url(7, "aaaaaa", "https://a.com"),
                    sample_url(6, "bbbbbb", "https://b.com"),
                ])
            });

        let service = UrlService::new(Arc::new(repo));
        let (total, items) = service.list_urls(2, 5).await.unwrap();

        assert_eq!(total, 12);
        assert_eq!(items.len(), 2);
    }
}
