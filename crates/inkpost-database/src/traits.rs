//! Store traits implemented by every persistence provider.

use async_trait::async_trait;
use uuid::Uuid;

use inkpost_core::result::AppResult;
use inkpost_entity::post::{CreatePost, Post, UpdatePost};
use inkpost_entity::user::{CreateUser, User};

/// Persistence for credential records.
///
/// Implementations must make username uniqueness atomic: of two concurrent
/// `create` calls for the same username exactly one succeeds and the other
/// returns a `Conflict` error.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Insert a new credential record.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Look up a credential record by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Persistence for blog posts.
#[async_trait]
pub trait PostStore: Send + Sync + std::fmt::Debug {
    /// All posts, newest first.
    async fn find_all(&self) -> AppResult<Vec<Post>>;

    /// Find a post by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>>;

    /// Insert a new post.
    async fn create(&self, data: &CreatePost) -> AppResult<Post>;

    /// Replace title and content. Returns `None` if the post does not exist.
    async fn update(&self, id: Uuid, data: &UpdatePost) -> AppResult<Option<Post>>;

    /// Delete a post. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
