//! JWT claims carried by bearer tokens.

use serde::{Deserialize, Serialize};

/// JWT claims structure.
///
/// Field names match the wire format (`username`, `is_admin`, `iat`, `exp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user name)
    pub username: String,
    /// Elevated (admin) access
    pub is_admin: bool,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued at `now` and valid for `expires_in_secs`.
    ///
    /// Returns `None` if the expiry does not fit in an `i64`.
    pub fn new(
        username: impl Into<String>,
        is_admin: bool,
        now: i64,
        expires_in_secs: i64,
    ) -> Option<Self> {
        Some(Self {
            username: username.into(),
            is_admin,
            iat: now,
            exp: now.checked_add(expires_in_secs)?,
        })
    }

    /// Check if the claims have expired at `now`.
    ///
    /// A token is still accepted in the second it expires.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }
}
