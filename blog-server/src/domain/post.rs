use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, tags};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// A post that has not been stored yet. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub location: String,
    pub author_id: String,
    pub author_name: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

/// Row shape of the `posts` table; `tags` is still encoded.
#[derive(Debug, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tags: Option<String>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let tags = tags::decode(row.tags.as_deref())?;
        Ok(Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            author_name: row.author_name,
            location: row.location,
            image_url: row.image_url,
            created_at: row.created_at,
            tags,
        })
    }
}
