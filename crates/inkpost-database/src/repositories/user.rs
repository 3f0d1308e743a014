//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use inkpost_core::error::{AppError, ErrorKind};
use inkpost_core::result::AppResult;
use inkpost_entity::user::{CreateUser, User};

use crate::traits::CredentialStore;

/// Name of the unique constraint on `users.username`.
const USERNAME_CONSTRAINT: &str = "users_username_key";

/// Maps an insert failure; a duplicate username becomes a conflict.
fn map_create_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(USERNAME_CONSTRAINT) || db_err.is_unique_violation() =>
        {
            AppError::conflict("Username already exists")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
    }
}

/// PostgreSQL-backed credential store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password_hash, role, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_create_error)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::DatabaseError;

    use super::*;

    #[derive(Debug)]
    struct InsertFailure {
        unique: bool,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for InsertFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message())
        }
    }

    impl StdError for InsertFailure {}

    impl DatabaseError for InsertFailure {
        fn message(&self) -> &str {
            "insert failed"
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            if self.unique {
                sqlx::error::ErrorKind::UniqueViolation
            } else {
                sqlx::error::ErrorKind::Other
            }
        }
    }

    fn db_error(unique: bool, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(InsertFailure { unique, constraint }))
    }

    #[test]
    fn test_unique_violation_is_conflict() {
        let err = map_create_error(db_error(true, Some(USERNAME_CONSTRAINT)));
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Username already exists");

        let err = map_create_error(db_error(true, None));
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_other_failures_are_database_errors() {
        let err = map_create_error(db_error(false, Some("users_role_check")));
        assert_eq!(err.kind, ErrorKind::Database);

        let err = map_create_error(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to create user");
    }
}
