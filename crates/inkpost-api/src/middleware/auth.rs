//! Bearer authentication middleware for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use inkpost_core::error::AppError;

use crate::extractors::auth::authenticate;
use crate::state::AppState;

/// Rejects the request unless it carries a valid bearer token.
///
/// No usable `Bearer` header is 401; a token that fails verification is 403.
/// On success the verified [`RequestContext`] is stored in the request
/// extensions for the role gate and the `AuthUser` extractor.
///
/// [`RequestContext`]: inkpost_service::context::RequestContext
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = authenticate(request.headers(), &state.jwt_decoder)?;
    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}
