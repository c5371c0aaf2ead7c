//! Link token generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Number of characters in a generated link token.
pub const TOKEN_LENGTH: usize = 64;

/// Generate a random alphanumeric link token.
///
/// No uniqueness retry is performed; the entropy of 64 alphanumeric
/// characters makes collisions negligible, and the `download_links.link`
/// column carries a UNIQUE constraint as a storage-layer backstop.
pub fn generate() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
