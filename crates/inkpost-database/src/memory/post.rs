//! In-memory post store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkpost_core::result::AppResult;
use inkpost_entity::post::{CreatePost, Post, UpdatePost};

use crate::traits::PostStore;

/// Posts keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostStore {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl MemoryPostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        let post = Post {
            id: Uuid::now_v7(),
            title: data.title.clone(),
            content: data.content.clone(),
            image_url: data.image_url.clone(),
            author: data.author.clone(),
            timestamp: data.timestamp.clone(),
            created_at: Utc::now(),
        };
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, data: &UpdatePost) -> AppResult<Option<Post>> {
        let mut posts = self.posts.write().await;
        Ok(posts.get_mut(&id).map(|post| {
            post.title = data.title.clone();
            post.content = data.content.clone();
            post.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> CreatePost {
        CreatePost {
            title: title.to_string(),
            content: "body".to_string(),
            image_url: String::new(),
            author: "Anonymous".to_string(),
            timestamp: "today".to_string(),
        }
    }

    #[tokio::test]
    async fn test_newest_first() {
        let store = MemoryPostStore::new();
        store.create(&new_post("first")).await.unwrap();
        store.create(&new_post("second")).await.unwrap();

        let titles: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = MemoryPostStore::new();
        let post = store.create(&new_post("draft")).await.unwrap();

        let updated = store
            .update(
                post.id,
                &UpdatePost {
                    title: "final".to_string(),
                    content: "edited".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.author, "Anonymous");

        assert!(store.delete(post.id).await.unwrap());
        assert!(!store.delete(post.id).await.unwrap());
        assert!(store.find_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryPostStore::new();
        let result = store
            .update(
                Uuid::now_v7(),
                &UpdatePost {
                    title: "t".to_string(),
                    content: "c".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
