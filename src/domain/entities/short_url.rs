//! ShortUrl entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its token and lifecycle timestamps.
///
/// `short_path` is the unique token used in the public redirect path. It is
/// immutable after creation; only `original_url` (and `updated_at`) change
/// on update.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortUrl {
    /// Returns true if the row has passed its expiry time.
    ///
    /// Expiry is a pure function of current time; expired rows still exist
    /// and stay visible to update, stats, delete, and list.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_path: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(expires_at: Option<DateTime<Utc>>) -> ShortUrl {
        let now = Utc::now();
        ShortUrl {
            id: 1,
            original_url: "https://example.com".to_string(),
            short_path: "abc123".to_string(),
            created_at: now,
            updated_at: now,
            expires_at,
        }
    }

    #[test]
    fn test_never_expires_without_expiry() {
        assert!(!sample(None).is_expired());
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        assert!(!sample(Some(Utc::now() + Duration::days(1))).is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        assert!(sample(Some(Utc::now() - Duration::seconds(1))).is_expired());
    }

    #[test]
    fn test_new_short_url_fields() {
        let new_url = NewShortUrl {
            original_url: "https://rust-lang.org".to_string(),
            short_path: "xyz789".to_string(),
            expires_at: None,
        };

        assert_eq!(new_url.original_url, "https://rust-lang.org");
        assert_eq!(new_url.short_path, "xyz789");
        assert!(new_url.expires_at.is_none());
    }
}
