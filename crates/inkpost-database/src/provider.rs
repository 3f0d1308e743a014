//! Store manager that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{info, warn};

use inkpost_core::config::DatabaseConfig;
use inkpost_core::error::{AppError, ErrorKind};
use inkpost_core::result::AppResult;

use crate::memory::{MemoryPostStore, MemoryUserStore};
use crate::repositories::{PostRepository, UserRepository};
use crate::traits::{CredentialStore, PostStore};

/// Reachability of the backing store as reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreHealth {
    /// The store answered a round trip.
    Connected,
    /// The store could not be reached.
    Disconnected,
}

impl StoreHealth {
    /// Label used in the health response body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

/// Owns the credential and post stores for the process lifetime.
///
/// The provider is selected once at startup from configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// Credential store.
    users: Arc<dyn CredentialStore>,
    /// Post store.
    posts: Arc<dyn PostStore>,
    /// Pool handle when backed by PostgreSQL.
    pool: Option<PgPool>,
}

impl StoreManager {
    /// Connect to the configured provider.
    ///
    /// For PostgreSQL this opens the pool and applies pending migrations;
    /// any failure is returned so the caller can abort startup.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let pool = open_postgres(config).await?;
                migrate_postgres(&pool).await?;
                Ok(Self::postgres(pool))
            }
            "memory" => {
                warn!(provider = "memory", "Using in-memory store; data is lost on restart");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Stores backed by an existing PostgreSQL pool.
    fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            posts: Arc::new(PostRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self::from_stores(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryPostStore::new()),
        )
    }

    /// Build from existing store implementations (for testing).
    pub fn from_stores(users: Arc<dyn CredentialStore>, posts: Arc<dyn PostStore>) -> Self {
        Self {
            users,
            posts,
            pool: None,
        }
    }

    /// The credential store.
    pub fn users(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(&self.users)
    }

    /// The post store.
    pub fn posts(&self) -> Arc<dyn PostStore> {
        Arc::clone(&self.posts)
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Checks the backing store with a single round trip.
    ///
    /// The memory provider lives in-process and is always connected.
    pub async fn health_check(&self) -> StoreHealth {
        let Some(pool) = &self.pool else {
            return StoreHealth::Connected;
        };

        match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
            Ok(_) => StoreHealth::Connected,
            Err(e) => {
                warn!(provider = "postgres", error = %e, "Store health check failed");
                StoreHealth::Disconnected
            }
        }
    }

    /// Release pooled connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!(provider = "postgres", "Store connections closed");
        }
    }
}

/// Opens the PostgreSQL pool described by `config`.
///
/// Only host, port and database name are logged; credentials in the URL
/// never reach the log.
async fn open_postgres(config: &DatabaseConfig) -> AppResult<PgPool> {
    let options: PgConnectOptions = config.url.parse().map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Invalid database URL", e)
    })?;

    info!(
        provider = "postgres",
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        max_connections = config.max_connections,
        "Opening store connections"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to PostgreSQL: {e}"),
                e,
            )
        })
}

/// Creates the `users` and `posts` tables when they are missing.
async fn migrate_postgres(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply schema migrations: {e}"),
                e,
            )
        })?;

    info!(provider = "postgres", "Schema is up to date");
    Ok(())
}
