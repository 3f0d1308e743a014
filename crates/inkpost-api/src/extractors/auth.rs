//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, verifies it, and injects the caller's context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use inkpost_auth::jwt::JwtDecoder;
use inkpost_core::error::AppError;
use inkpost_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Returns the token from an `Authorization: Bearer <token>` header.
///
/// A missing header, a non-Bearer scheme, or an empty token is an
/// authentication failure (401).
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

    // Auth scheme names are case-insensitive.
    let token = header
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    if token.is_empty() {
        return Err(AppError::authentication("Missing bearer token"));
    }

    Ok(token)
}

/// Verifies the bearer token in `headers`.
///
/// A well-formed header whose token fails verification is an authorization
/// failure (403).
pub fn authenticate(headers: &HeaderMap, decoder: &JwtDecoder) -> Result<RequestContext, AppError> {
    let token = bearer_token(headers)?;
    let claims = decoder.verify(token).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected bearer token");
        AppError::from(e)
    })?;
    Ok(RequestContext::from(claims))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by the `require_auth` middleware on protected routes.
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(AuthUser(ctx.clone()));
        }

        authenticate(&parts.headers, &state.jwt_decoder).map(AuthUser)
    }
}
