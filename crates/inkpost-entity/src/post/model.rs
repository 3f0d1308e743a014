//! Blog post model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Author shown when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A published blog post.
///
/// Serialized with the field names the browser client reads (`_id`,
/// `imageUrl`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Optional header image URL (empty when absent).
    pub image_url: String,
    /// Display name of the author.
    pub author: String,
    /// Display timestamp as supplied by the client, or RFC 3339 creation time.
    pub timestamp: String,
    /// Server-side creation time, used for ordering.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new post.
#[derive(Debug, Clone)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Header image URL.
    pub image_url: String,
    /// Author display name.
    pub author: String,
    /// Display timestamp.
    pub timestamp: String,
}

/// Replacement title and body for an existing post.
#[derive(Debug, Clone)]
pub struct UpdatePost {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
}
