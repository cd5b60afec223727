//! Password-recovery token policy.
//!
//! Recovery tokens are opaque random strings handed to the user by email.
//! Only their SHA-256 hash is persisted, so a leaked table cannot be replayed.

use chrono::Duration;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::types::Timestamp;

/// Lifetime of a recovery token.
pub const RECOVERY_TOKEN_TTL_MINS: i64 = 15;

/// Path segment the frontend serves the reset form under.
const RESET_PATH: &str = "reset-password";

/// Generate a recovery token.
///
/// Returns `(plaintext, sha256_hex_hash)`. The plaintext goes into the link;
/// only the hash is stored.
pub fn issue_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest of a recovery token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Expiry instant for a token issued at `issued_at`.
pub fn expires_at(issued_at: Timestamp) -> Timestamp {
    issued_at + Duration::minutes(RECOVERY_TOKEN_TTL_MINS)
}

/// A token is expired once `now` is strictly after its expiry.
pub fn is_expired(expires_at: Timestamp, now: Timestamp) -> bool {
    now > expires_at
}

/// Build the link embedded in the recovery email.
pub fn recovery_link(frontend_base: &str, token: &str) -> String {
    format!("{}/{RESET_PATH}/{token}", frontend_base.trim_end_matches('/'))
}
