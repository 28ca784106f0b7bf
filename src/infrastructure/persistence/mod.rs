//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits over a shared
//! `sqlx::PgPool`. Every operation acquires its connection (or transaction)
//! from the pool at entry; sqlx transaction guards roll back on drop, so
//! error paths never leave a transaction open.

pub mod pg_access_log_repository;
pub mod pg_url_repository;

pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_url_repository::PgUrlRepository;
