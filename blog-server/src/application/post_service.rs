use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::{error::StoreError, post::Post};
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

/// Orchestrates the five post operations on top of a repository.
/// Validation and timestamp rules live here, storage does not decide them.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.repo.list().await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::PostNotFound(id))
    }

    #[instrument(skip(self, content))]
    pub async fn create_post(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, StoreError> {
        validate_fields(&title, &content, &author)?;
        self.repo.insert(Post::new(title, content, author)).await
    }

    /// Full replacement of the three mutable fields. `createdAt` and
    /// `postId` are preserved, `updatedAt` is refreshed.
    #[instrument(skip(self, content))]
    pub async fn update_post(
        &self,
        id: Uuid,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, StoreError> {
        validate_fields(&title, &content, &author)?;
        self.repo
            .replace(id, title, content, author, Utc::now())
            .await?
            .ok_or(StoreError::PostNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(StoreError::PostNotFound(id))
        }
    }
}

fn validate_fields(title: &str, content: &str, author: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() || content.trim().is_empty() || author.trim().is_empty() {
        return Err(StoreError::Validation(
            "Title, content, and author cannot be empty".into(),
        ));
    }
    Ok(())
}
