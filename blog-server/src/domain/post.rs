use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post. Wire representation is camelCase JSON with RFC 3339
/// timestamps; `postId` is assigned once at creation and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: String, content: String, author: String) -> Self {
        let now = Utc::now();
        Self {
            post_id: Uuid::new_v4(),
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }
}
