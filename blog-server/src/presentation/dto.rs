use crate::domain::comment::NewComment;
use crate::domain::post::NewPost;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ======================= POSTS =======================

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "author_id must not be empty"))]
    pub author_id: String,
    #[validate(length(min = 1, message = "author_name must not be empty"))]
    pub author_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            location: req.location,
            author_id: req.author_id,
            author_name: req.author_name,
            image_url: req.image_url,
            tags: req.tags,
        }
    }
}

// ======================= COMMENTS =======================

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "author_id must not be empty"))]
    pub author_id: String,
    #[validate(length(min = 1, message = "author_name must not be empty"))]
    pub author_name: String,
}

impl CreateCommentRequest {
    pub fn into_new_comment(self, post_id: i64) -> NewComment {
        NewComment {
            post_id,
            content: self.content,
            author_id: self.author_id,
            author_name: self.author_name,
        }
    }
}

// ======================= Responses =======================

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

impl CreatedResponse {
    pub fn post(id: i64) -> Self {
        Self {
            id,
            message: "Post created successfully",
        }
    }

    pub fn comment(id: i64) -> Self {
        Self {
            id,
            message: "Comment created successfully",
        }
    }
}
