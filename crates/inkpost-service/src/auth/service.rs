//! Registration and login against the credential store.

use std::sync::Arc;

use tracing::{info, warn};

use inkpost_auth::jwt::{IssuedToken, JwtEncoder};
use inkpost_auth::password::PasswordHasher;
use inkpost_core::error::AppError;
use inkpost_core::result::AppResult;
use inkpost_database::traits::CredentialStore;
use inkpost_entity::user::{CreateUser, User, UserRole};

/// Shared message for every failed login.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The signed bearer token.
    pub token: IssuedToken,
    /// The authenticated user.
    pub user: User,
}

/// Handles account registration and credential checks.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    users: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Creates a credential record.
    ///
    /// The username is trimmed before storage. A missing or empty role means
    /// [`UserRole::User`]. A taken username surfaces as a conflict from the
    /// store.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Option<&str>,
    ) -> AppResult<User> {
        let username = require_credentials(username, password)?;

        let role = match role.map(str::trim).filter(|r| !r.is_empty()) {
            Some(r) => r.parse::<UserRole>()?,
            None => UserRole::default(),
        };

        let password_hash = self.hash(password).await?;

        let user = self
            .users
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        info!(username = %user.username, role = %user.role, "User registered");

        Ok(user)
    }

    /// Checks a username and password and issues a token on success.
    ///
    /// An unknown username and a wrong password fail with the same error,
    /// and both cost one hash verification.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResult> {
        let username = require_credentials(username, password)?;

        let user = self.users.find_by_username(username).await?;

        let hasher = Arc::clone(&self.hasher);
        let candidate = password.to_string();
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => hasher.verify_password(&candidate, &hash),
            None => hasher.verify_dummy(&candidate),
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!(username = %username, "Failed login attempt");
                return Err(AppError::authentication(INVALID_CREDENTIALS));
            }
        };

        let token = self.encoder.issue(&user.username, user.role)?;

        info!(username = %user.username, role = %user.role, "User logged in");

        Ok(LoginResult { token, user })
    }

    /// Looks up a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find_by_username(username.trim()).await
    }

    async fn hash(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }
}

/// Returns the trimmed username when both fields hold more than whitespace.
fn require_credentials<'a>(username: &'a str, password: &str) -> AppResult<&'a str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(AppError::validation("Username and password required"));
    }
    Ok(username)
}
