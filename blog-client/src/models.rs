use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub location: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
    pub author_id: String,
    pub author_name: String,
}

/// Acknowledgement returned by both create endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: i64,
    pub message: String,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {} @ {}", self.id, self.title, self.location)?;
        writeln!(
            f,
            "    by {} on {}",
            self.author_name,
            self.created_at.format("%Y-%m-%d %H:%M")
        )?;
        if let Some(url) = &self.image_url {
            writeln!(f, "    image: {}", url)?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "    tags: {}", self.tags.join(", "))?;
        }
        write!(f, "    {}", self.content)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.id,
            self.author_name,
            self.created_at.format("%Y-%m-%d %H:%M"),
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_post_shape() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Kyoto",
            "content": "...",
            "author_id": "u1",
            "author_name": "Ann",
            "location": "Kyoto, Japan",
            "image_url": null,
            "created_at": "2024-05-01T12:00:00Z",
            "tags": ["temples", "autumn"]
        }))
        .unwrap();

        assert_eq!(post.image_url, None);
        assert_eq!(post.tags, vec!["temples", "autumn"]);
        assert!(post.to_string().contains("tags: temples, autumn"));
    }

    #[test]
    fn new_post_omits_missing_image() {
        let json = serde_json::to_value(NewPost {
            title: "t".into(),
            content: "c".into(),
            location: "l".into(),
            author_id: "u1".into(),
            author_name: "Ann".into(),
            image_url: None,
            tags: vec![],
        })
        .unwrap();

        assert!(json.get("image_url").is_none());
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
