use crate::domain::error::StoreError;
use crate::domain::post::Post;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

/// Storage abstraction for posts. The service layer owns validation and
/// timestamp rules; implementations only persist.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
    /// All posts, newest first by `created_at`.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;
    /// Full replacement of the three mutable fields. Returns the updated
    /// post, or `None` when no post with `id` exists.
    async fn replace(
        &self,
        id: Uuid,
        title: String,
        content: String,
        author: String,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Post>, StoreError>;
    /// Returns `false` when no post with `id` existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO posts (post_id, title, content, author, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to insert post: {}", e);
            StoreError::Internal(e.to_string())
        })?;

        info!(post_id = %post.post_id, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT post_id, title, content, author, created_at, updated_at
            FROM posts WHERE post_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            StoreError::Internal(e.to_string())
        })
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT post_id, title, content, author, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while listing posts: {}", e);
            StoreError::Internal(e.to_string())
        })
    }

    async fn replace(
        &self,
        id: Uuid,
        title: String,
        content: String,
        author: String,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, content = $2, author = $3, updated_at = $4
            WHERE post_id = $5
            RETURNING post_id, title, content, author, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author)
        .bind(updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            StoreError::Internal(e.to_string())
        })?;

        if post.is_some() {
            info!(post_id = %id, "post updated");
        }

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to delete post {}: {}", id, e);
                StoreError::Internal(e.to_string())
            })?;

        if deleted.rows_affected() == 0 {
            return Ok(false);
        }

        info!(post_id = %id, "post deleted");
        Ok(true)
    }
}
