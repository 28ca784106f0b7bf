//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

/// Redirects a short token to its original URL, recording the visit.
///
/// # Endpoint
///
/// `GET /{short_path}`
///
/// The lookup locks the row, checks expiry, and writes one access log entry
/// in a single transaction; the response is a 307 Temporary Redirect to the
/// stored destination.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
/// Returns 410 Gone if the URL is past its expiry (nothing is logged).
/// Returns 500 on storage failure (the visit is not partially recorded).
pub async fn redirect_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
    ClientIp(ip_address): ClientIp,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let destination = state
        .access_service
        .record_access(&short_path, ip_address, user_agent)
        .await?;

    Ok(Redirect::temporary(&destination))
}
