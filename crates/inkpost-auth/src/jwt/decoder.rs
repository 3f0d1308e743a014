//! JWT token validation.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, crypto, decode};
use thiserror::Error;

use inkpost_core::config::AuthConfig;
use inkpost_core::error::AppError;

use super::claims::Claims;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token could not be parsed as a JWT with the expected claims.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the payload under the server secret.
    #[error("token signature is invalid")]
    BadSignature,
    /// The current time is at or past the token's expiry.
    #[error("token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authorization(format!("Invalid token: {err}"))
    }
}

/// Validates HS256 bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature and expiry and returns the embedded claims.
    ///
    /// The HMAC over `header.payload` is checked before either segment is
    /// decoded, so any edit to a well-formed token surfaces as
    /// [`TokenError::BadSignature`]. [`TokenError::Malformed`] is left for
    /// input that is not three non-empty segments, or a correctly signed
    /// token whose claims do not decode.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let (message, signature) = split_signed(token).ok_or(TokenError::Malformed)?;

        let signed = crypto::verify(
            signature,
            message.as_bytes(),
            &self.decoding_key,
            Algorithm::HS256,
        )
        .unwrap_or(false);
        if !signed {
            return Err(TokenError::BadSignature);
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    JwtErrorKind::ExpiredSignature => TokenError::Expired,
                    JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                        TokenError::BadSignature
                    }
                    _ => TokenError::Malformed,
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(Utc::now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// Splits a compact JWS into its signed message and signature.
fn split_signed(token: &str) -> Option<(&str, &str)> {
    let (message, signature) = token.rsplit_once('.')?;
    let (header, payload) = message.split_once('.')?;
    if header.is_empty() || payload.is_empty() || signature.is_empty() || payload.contains('.') {
        return None;
    }
    Some((message, signature))
}
