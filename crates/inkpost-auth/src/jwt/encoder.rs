//! JWT token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use inkpost_core::config::AuthConfig;
use inkpost_core::error::AppError;
use inkpost_entity::user::UserRole;

use super::claims::Claims;

/// A freshly signed token and its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Compact JWS (`header.payload.signature`, base64url).
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Creates HS256-signed bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issues a token for `username` carrying `role`, valid for 24 hours.
    pub fn issue(&self, username: &str, role: UserRole) -> Result<IssuedToken, AppError> {
        self.sign(&Claims::new(username, role, Utc::now()))
    }

    /// Signs an arbitrary claims set.
    pub fn sign(&self, claims: &Claims) -> Result<IssuedToken, AppError> {
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;
        let token = encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> JwtEncoder {
        JwtEncoder::new(&AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
        })
    }

    #[test]
    fn test_issue_reports_expiry() {
        let issued = encoder().issue("alice", UserRole::User).unwrap();
        assert!(issued.expires_at > Utc::now());
        assert_eq!(issued.token.matches('.').count(), 2);
    }

    #[test]
    fn test_sign_rejects_unrepresentable_expiry() {
        let claims = Claims {
            exp: i64::MAX,
            ..Claims::new("alice", UserRole::User, Utc::now())
        };
        let err = encoder().sign(&claims).unwrap_err();
        assert_eq!(err.kind, inkpost_core::error::ErrorKind::Internal);
    }
}
