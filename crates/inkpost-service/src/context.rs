//! Request context carrying the authenticated identity.

use serde::{Deserialize, Serialize};

use inkpost_auth::jwt::Claims;
use inkpost_entity::user::UserRole;

/// Identity of the caller, derived from a verified bearer token.
///
/// Built per request by the auth middleware and dropped with the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The username from the token.
    pub username: String,
    /// The role at the time the token was issued.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(username: String, role: UserRole) -> Self {
        Self { username, role }
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims.username, claims.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_from_claims() {
        let claims = Claims::new("alice", UserRole::Admin, Utc::now());
        let ctx = RequestContext::from(claims);
        assert_eq!(ctx.username, "alice");
        assert_eq!(ctx.role, UserRole::Admin);
    }
}
