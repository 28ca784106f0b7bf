//! Helper functions used across the application.
//!
//! - [`token`] - Short token generation
//! - [`base_url`] - Request base-URL derivation for absolute links
//! - [`client_ip`] - Client address extraction for access logs

pub mod base_url;
pub mod client_ip;
pub mod token;
