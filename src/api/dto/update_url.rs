//! DTO for the URL update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /api/urls/{short_path}`.
///
/// Only the destination can change; the token is immutable after creation.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,
}
