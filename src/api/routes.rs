//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, list_urls_handler, stats_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Management and statistics routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /urls`                     - Create a short URL
/// - `GET    /urls`                     - Paginated listing
/// - `PUT    /urls/{short_path}`        - Replace the destination URL
/// - `DELETE /urls/{short_path}`        - Delete a URL and its access logs
/// - `GET    /urls/{short_path}/stats`  - Access statistics
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler).get(list_urls_handler))
        .route(
            "/urls/{short_path}",
            put(update_url_handler).delete(delete_url_handler),
        )
        .route("/urls/{short_path}/stats", get(stats_handler))
}
