//! Application services orchestrating the repositories.
//!
//! - [`UrlService`] - URL registry: create, update, delete, paginated list
//! - [`AccessService`] - Access recorder: redirect-with-log and statistics

pub mod access_service;
pub mod url_service;

pub use access_service::{AccessService, RECENT_ACCESS_LIMIT, STATS_WINDOW_DAYS, UrlStats};
pub use url_service::UrlService;
