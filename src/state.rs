//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AccessService, UrlService};
use crate::infrastructure::persistence::{PgAccessLogRepository, PgUrlRepository};

/// Dependencies injected into every handler.
///
/// Built once at startup; all shared state lives in the database behind the
/// pool, so cloning is cheap and handlers hold no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<PgUrlRepository>>,
    pub access_service: Arc<AccessService<PgUrlRepository, PgAccessLogRepository>>,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
        let access_log_repository = Arc::new(PgAccessLogRepository::new(pool));

        Self {
            url_service: Arc::new(UrlService::new(url_repository.clone())),
            access_service: Arc::new(AccessService::new(url_repository, access_log_repository)),
        }
    }
}
