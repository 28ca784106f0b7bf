//! Request base-URL derivation.
//!
//! Absolute URLs in response payloads (short links, stats links) are built
//! from the incoming request's own address rather than configuration.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Derives `scheme://host[:port]` from request headers.
///
/// The scheme comes from `X-Forwarded-Proto` when a reverse proxy sets it,
/// falling back to `http`. The `Host` header is used verbatim, port
/// included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn request_base_url(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
        .unwrap_or("http");

    Ok(format!("{}://{}", scheme, host))
}
