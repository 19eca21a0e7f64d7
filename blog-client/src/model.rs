use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A post as the store returns it. `postId` is opaque to the client; it is
/// assigned by the store and never reused. Every response body is parsed
/// against this schema before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (by {})", self.post_id, self.title, self.author)
    }
}

/// The three writable fields of a post, as submitted by create and update
/// forms. Validated locally before any request is issued.
#[derive(Debug, Clone, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Pre-flight check: all three fields must be non-empty after trimming.
    /// Fails without touching the network.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty()
            || self.content.trim().is_empty()
            || self.author.trim().is_empty()
        {
            return Err(ClientError::Validation(
                "Title, content, and author cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_all_fields_is_valid() {
        assert!(PostDraft::new("Hello", "World", "Jungyu").validate().is_ok());
    }

    #[test]
    fn draft_with_a_blank_field_is_rejected() {
        for draft in [
            PostDraft::new("", "World", "Jungyu"),
            PostDraft::new("Hello", "   ", "Jungyu"),
            PostDraft::new("Hello", "World", "\n"),
        ] {
            assert!(matches!(
                draft.validate(),
                Err(ClientError::Validation(_))
            ));
        }
    }

    #[test]
    fn post_parses_the_store_wire_format() {
        let post: Post = serde_json::from_str(
            r#"{"postId":"p1","title":"Hello","content":"World","author":"Jungyu",
                "createdAt":"2024-05-01T10:00:00Z","updatedAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.post_id, "p1");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn content_newlines_survive_the_round_trip() {
        let post = Post {
            post_id: "p1".into(),
            title: "Hello".into(),
            content: "line one\nline two\n".into(),
            author: "Jungyu".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let back: Post = serde_json::from_str(&serde_json::to_string(&post).unwrap()).unwrap();
        assert_eq!(back.content, "line one\nline two\n");
    }
}
