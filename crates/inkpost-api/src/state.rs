//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use inkpost_auth::jwt::{JwtDecoder, JwtEncoder};
use inkpost_auth::password::PasswordHasher;
use inkpost_auth::rbac::RbacEnforcer;
use inkpost_core::config::AppConfig;
use inkpost_database::StoreManager;
use inkpost_service::auth::AuthService;
use inkpost_service::post::PostService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Credential and post stores
    pub stores: StoreManager,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role gate for mutating routes
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Post management
    pub post_service: Arc<PostService>,
}

impl AppState {
    /// Wires the auth primitives and services on top of `stores`.
    ///
    /// The signing secret is read from `config.auth` once here and never
    /// rotated for the lifetime of the state.
    pub fn new(config: AppConfig, stores: StoreManager) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(
            stores.users(),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));
        let post_service = Arc::new(PostService::new(
            stores.posts(),
            Arc::clone(&rbac_enforcer),
        ));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            rbac_enforcer,
            auth_service,
            post_service,
        }
    }
}
