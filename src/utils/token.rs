//! Short token generation.

use rand::Rng;

/// Length of generated short tokens.
const TOKEN_LENGTH: usize = 6;

/// Characters a generated token may contain.
const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 6-character lowercase-alphanumeric token.
///
/// Collision handling is the caller's concern; see
/// [`crate::application::services::UrlService`].
pub fn generate_short_path() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}
