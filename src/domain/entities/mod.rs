//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`ShortUrl`] - A shortened URL mapping with optional expiry
//! - [`AccessLog`] - One redirect event against a [`ShortUrl`]
//!
//! Creation inputs use separate structs ([`NewShortUrl`]) so storage-assigned
//! fields (id, timestamps) never appear half-initialized.

pub mod access_log;
pub mod short_url;

pub use access_log::AccessLog;
pub use short_url::{NewShortUrl, ShortUrl};
