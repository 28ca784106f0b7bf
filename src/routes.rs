//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /healthcheck`   - Liveness (public)
//! - `GET /{short_path}`  - Short URL redirect (public)
//! - `/api/*`             - Management and statistics endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The redirect route matches any single top-level path segment. Static
/// routes win over the capture, so a caller-supplied token equal to
/// `healthcheck` is stored but never reachable for redirects; tokens are
/// not validated against reserved names.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/healthcheck", get(health_handler))
        .route("/{short_path}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
