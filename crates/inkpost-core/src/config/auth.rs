//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication configuration.
///
/// The signing secret has no default: an absent or blank secret is
/// rejected by [`AppConfig::validate`](super::AppConfig::validate).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}
