//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use inkpost_service::post::CreatePostRequest;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password required"))]
    pub password: String,
    /// Role (`user` or `admin`); defaults to `user`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password required"))]
    pub password: String,
}

/// New post body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody {
    /// Title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub title: String,
    /// Body text.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub content: String,
    /// Header image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Author display name.
    #[serde(default)]
    pub author: Option<String>,
    /// Display timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl From<CreatePostBody> for CreatePostRequest {
    fn from(body: CreatePostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            image_url: body.image_url,
            author: body.author,
            timestamp: body.timestamp,
        }
    }
}

/// Post edit body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostBody {
    /// New title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub title: String,
    /// New body text.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and content are required"))]
    pub content: String,
}
