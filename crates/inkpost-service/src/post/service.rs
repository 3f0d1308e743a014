//! Post listing, lookup, and admin-only mutations.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use inkpost_auth::rbac::RbacEnforcer;
use inkpost_core::error::AppError;
use inkpost_core::result::AppResult;
use inkpost_database::traits::PostStore;
use inkpost_entity::post::{CreatePost, DEFAULT_AUTHOR, Post, UpdatePost};

use crate::context::RequestContext;

/// Input for a new post. Optional fields fall back to defaults.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreatePostRequest {
    /// Post title (required).
    pub title: String,
    /// Post body (required).
    pub content: String,
    /// Header image URL.
    pub image_url: Option<String>,
    /// Author display name.
    pub author: Option<String>,
    /// Display timestamp.
    pub timestamp: Option<String>,
}

/// Manages blog posts.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post store.
    posts: Arc<dyn PostStore>,
    /// Role gate for mutations.
    rbac: Arc<RbacEnforcer>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(posts: Arc<dyn PostStore>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { posts, rbac }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> AppResult<Vec<Post>> {
        self.posts.find_all().await
    }

    /// A single post by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    /// Publishes a new post.
    pub async fn create(&self, ctx: &RequestContext, req: CreatePostRequest) -> AppResult<Post> {
        self.rbac.require_editor(ctx.role)?;
        require_text(&req.title, &req.content)?;

        let data = CreatePost {
            title: req.title,
            content: req.content,
            image_url: non_blank(req.image_url).unwrap_or_default(),
            author: non_blank(req.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            timestamp: non_blank(req.timestamp).unwrap_or_else(|| Utc::now().to_rfc3339()),
        };

        let post = self.posts.create(&data).await?;

        info!(post_id = %post.id, username = %ctx.username, "Post created");

        Ok(post)
    }

    /// Replaces the title and body of an existing post.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        title: String,
        content: String,
    ) -> AppResult<Post> {
        self.rbac.require_editor(ctx.role)?;
        require_text(&title, &content)?;

        let post = self
            .posts
            .update(id, &UpdatePost { title, content })
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        info!(post_id = %id, username = %ctx.username, "Post updated");

        Ok(post)
    }

    /// Removes a post.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        self.rbac.require_editor(ctx.role)?;

        if !self.posts.delete(id).await? {
            return Err(AppError::not_found("Post not found"));
        }

        info!(post_id = %id, username = %ctx.username, "Post deleted");

        Ok(())
    }
}

fn require_text(title: &str, content: &str) -> AppResult<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(AppError::validation("Title and content are required"));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
