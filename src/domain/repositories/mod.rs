//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence` and mocks are auto-generated
//! via `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short URL CRUD and pagination
//! - [`AccessLogRepository`] - Redirect recording and access statistics

pub mod access_log_repository;
pub mod url_repository;

pub use access_log_repository::{AccessLogRepository, AccessOutcome};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use access_log_repository::MockAccessLogRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
