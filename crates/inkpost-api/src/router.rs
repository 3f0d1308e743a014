//! Route definitions for the Inkpost HTTP API.
//!
//! Public routes and admin routes are built separately and merged; the
//! admin group carries the bearer-auth and role-gate layers. Anything that
//! matches no route is served from the static directory.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and route-level middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .merge(auth_routes())
        .merge(public_post_routes())
        .merge(admin_post_routes(state.clone()))
        .merge(health_routes())
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Read-only post endpoints and the detail page
fn public_post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(handlers::post::list_posts))
        .route("/post/{id}", get(handlers::page::post_page))
}

/// Post mutations, admin only
fn admin_post_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::post::create_post))
        .route(
            "/posts/{id}",
            put(handlers::post::update_post).delete(handlers::post::delete_post),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rbac::require_editor,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
