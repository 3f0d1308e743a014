//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inkpost_entity::user::UserRole;

/// Lifetime of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims payload.
///
/// The verifier trusts these values as issued: a role change in the store
/// only takes effect for tokens issued after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated account.
    pub username: String,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims issued at `now` that expire after [`TOKEN_TTL_HOURS`].
    pub fn new(username: &str, role: UserRole, now: DateTime<Utc>) -> Self {
        let exp = now + chrono::Duration::hours(TOKEN_TTL_HOURS);
        Self {
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Returns the expiration, or `None` when `exp` is outside chrono's range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token is expired once the current time reaches `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
