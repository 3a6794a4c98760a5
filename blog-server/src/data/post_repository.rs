use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostRow};
use crate::domain::tags;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{error, info};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn get_posts(&self) -> Result<Vec<Post>, DomainError>;
}

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create(&self, post: NewPost) -> Result<i64, DomainError> {
        let now = Utc::now();
        let encoded_tags = tags::encode(&post.tags)?;
        let result = sqlx::query(
            r#"
            INSERT INTO posts (title, content, author_id, author_name, location, image_url, created_at, tags)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author_id)
        .bind(&post.author_name)
        .bind(&post.location)
        .bind(&post.image_url)
        .bind(now)
        .bind(encoded_tags)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            DomainError::from(e)
        })?;

        let id = result.last_insert_rowid();
        info!(post_id = id, author_id = %post.author_id, "post created");
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, author_name, location, image_url, created_at, tags
            FROM posts WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::from(e)
        })?;

        row.map(Post::try_from).transpose()
    }

    async fn get_posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, author_name, location, image_url, created_at, tags
            FROM posts
            ORDER BY julianday(created_at) DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts: {}", e);
            DomainError::from(e)
        })?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
