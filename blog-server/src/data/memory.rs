use std::collections::HashMap;

use crate::data::post_repository::PostRepository;
use crate::domain::error::StoreError;
use crate::domain::post::Post;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// In-memory store, used when no `DATABASE_URL` is configured and by the
/// test suite. Contents are lost on shutdown.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.post_id, post.clone());
        info!(post_id = %post.post_id, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn replace(
        &self,
        id: Uuid,
        title: String,
        content: String,
        author: String,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(&id) {
            Some(post) => {
                post.title = title;
                post.content = content;
                post.author = author;
                post.updated_at = updated_at;
                info!(post_id = %id, "post updated");
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let existed = posts.remove(&id).is_some();
        if existed {
            info!(post_id = %id, "post deleted");
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delete_is_idempotent_from_the_store_side() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new("Hello".into(), "World".into(), "Jungyu".into());
        let id = post.post_id;
        repo.insert(post).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        let mut older = Post::new("first".into(), "a".into(), "x".into());
        let mut newer = Post::new("second".into(), "b".into(), "x".into());
        older.created_at = Utc::now() - chrono::Duration::hours(1);
        newer.created_at = Utc::now();
        repo.insert(older).await.unwrap();
        repo.insert(newer).await.unwrap();

        let posts = repo.list().await.unwrap();
        assert_eq!(posts[0].title, "second");
        assert_eq!(posts[1].title, "first");
    }
}
