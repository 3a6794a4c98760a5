use crate::error::BlogClientError;
use crate::models::{Comment, Created, NewComment, NewPost, Post};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Clone)]
pub struct BlogClient {
    client: Arc<Client>,
    base_url: String,
}

impl BlogClient {
    pub fn connect(endpoint: &str) -> Result<Self, BlogClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let resp = self
            .client
            .get(format!("{}/api/posts", self.base_url))
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, BlogClientError> {
        let resp = self
            .client
            .get(format!("{}/api/posts/{}", self.base_url, id))
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Created, BlogClientError> {
        let resp = self
            .client
            .post(format!("{}/api/posts", self.base_url))
            .json(post)
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, BlogClientError> {
        let resp = self
            .client
            .get(format!("{}/api/posts/{}/comments", self.base_url, post_id))
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn create_comment(
        &self,
        post_id: i64,
        comment: &NewComment,
    ) -> Result<Created, BlogClientError> {
        let resp = self
            .client
            .post(format!("{}/api/posts/{}/comments", self.base_url, post_id))
            .json(comment)
            .send()
            .await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, BlogClientError> {
    if resp.status().is_success() {
        Ok(resp.json().await?)
    } else {
        Err(BlogClientError::from_http_response(resp).await)
    }
}
