use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::domain::{
    error::DomainError,
    post::{NewPost, Post},
};
use tracing::instrument;

#[derive(Clone)]
pub struct PostService<R: PostRepository + 'static> {
    repo: Arc<R>,
}

impl<R> PostService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.get_posts().await
    }

    #[instrument(skip(self, post), fields(author_id = %post.author_id))]
    pub async fn create_post(&self, post: NewPost) -> Result<i64, DomainError> {
        self.repo.create(post).await
    }
}
