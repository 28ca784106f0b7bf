//! DTO for the URL creation endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/urls`.
///
/// `short_path` is optional; when omitted a random 6-character token is
/// assigned. Caller-supplied values are accepted verbatim.
/// `expires_in_days` accepts fractional and negative values; omitted means
/// the URL never expires.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,

    pub short_path: Option<String>,

    pub expires_in_days: Option<f64>,
}
