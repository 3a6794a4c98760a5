use std::sync::Arc;

use crate::data::comment_repository::CommentRepository;
use crate::domain::{
    comment::{Comment, NewComment},
    error::DomainError,
};
use tracing::instrument;

/// Comments are accepted for any post id; no existence check is made.
#[derive(Clone)]
pub struct CommentService<R: CommentRepository + 'static> {
    repo: Arc<R>,
}

impl<R> CommentService<R>
where
    R: CommentRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_comments(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        self.repo.list_for_post(post_id).await
    }

    #[instrument(skip(self, comment), fields(post_id = comment.post_id, author_id = %comment.author_id))]
    pub async fn create_comment(&self, comment: NewComment) -> Result<i64, DomainError> {
        self.repo.create(comment).await
    }
}
