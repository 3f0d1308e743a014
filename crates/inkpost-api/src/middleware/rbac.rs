//! Role gate middleware for admin-only routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use inkpost_auth::rbac::FORBIDDEN_MESSAGE;
use inkpost_core::error::AppError;
use inkpost_service::context::RequestContext;

use crate::state::AppState;

/// Lets the request through only when the authenticated role may edit posts.
///
/// Must run after [`require_auth`](super::auth::require_auth).
pub async fn require_editor(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let role = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.role)
        .ok_or_else(|| AppError::authentication("Authentication required"))?;

    let rbac = &state.rbac_enforcer;
    if !rbac.allow(role, rbac.editor_role()) {
        tracing::debug!(role = %role, path = %request.uri().path(), "Role gate denied request");
        return Err(AppError::authorization(FORBIDDEN_MESSAGE));
    }

    Ok(next.run(request).await)
}
