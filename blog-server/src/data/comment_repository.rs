use crate::domain::comment::{Comment, NewComment};
use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{error, info};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: NewComment) -> Result<i64, DomainError>;
    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
}

#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<i64, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (post_id, content, author_id, author_name, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(comment.post_id)
        .bind(&comment.content)
        .bind(&comment.author_id)
        .bind(&comment.author_name)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create comment on post {}: {}", comment.post_id, e);
            DomainError::from(e)
        })?;

        let id = result.last_insert_rowid();
        info!(comment_id = id, post_id = comment.post_id, "comment created");
        Ok(id)
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, content, author_id, author_name, created_at
            FROM comments
            WHERE post_id = ?1
            ORDER BY julianday(created_at) DESC, id DESC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching comments for post {}: {}", post_id, e);
            DomainError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_pool;
    use chrono::TimeZone;

    fn new_comment(post_id: i64, content: &str) -> NewComment {
        NewComment {
            post_id,
            content: content.into(),
            author_id: "u2".into(),
            author_name: "Bob".into(),
        }
    }

    #[tokio::test]
    async fn post_without_comments_lists_nothing() {
        let repo = SqliteCommentRepository::new(test_pool().await);
        assert!(repo.list_for_post(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_comment_is_listed() {
        let repo = SqliteCommentRepository::new(test_pool().await);
        let id = repo.create(new_comment(1, "Nice!")).await.unwrap();

        let comments = repo.list_for_post(1).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, id);
        assert_eq!(comments[0].post_id, 1);
        assert_eq!(comments[0].content, "Nice!");
        assert_eq!(comments[0].author_id, "u2");
        assert_eq!(comments[0].author_name, "Bob");
    }

    #[tokio::test]
    async fn comments_stay_with_their_post() {
        let repo = SqliteCommentRepository::new(test_pool().await);
        repo.create(new_comment(1, "first")).await.unwrap();
        repo.create(new_comment(2, "elsewhere")).await.unwrap();
        repo.create(new_comment(1, "second")).await.unwrap();

        let contents: Vec<String> = repo
            .list_for_post(1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.content)
            .collect();

        assert_eq!(contents, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn accepts_comments_for_unknown_posts() {
        let repo = SqliteCommentRepository::new(test_pool().await);
        let id = repo.create(new_comment(12345, "orphan")).await.unwrap();
        assert!(id > 0);
        assert_eq!(repo.list_for_post(12345).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn legacy_timestamps_sort_by_time() {
        let pool = test_pool().await;
        let repo = SqliteCommentRepository::new(pool.clone());

        sqlx::query(
            "INSERT INTO comments (post_id, content, author_id, author_name, created_at) \
             VALUES (1, 'legacy-late', 'u2', 'Bob', '2024-05-01 23:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO comments (post_id, content, author_id, author_name, created_at) \
             VALUES (1, 'new-early', 'u2', 'Bob', ?1)",
        )
        .bind(Utc.with_ymd_and_hms(2024, 5, 1, 1, 0, 0).unwrap())
        .execute(&pool)
        .await
        .unwrap();

        let contents: Vec<String> = repo
            .list_for_post(1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.content)
            .collect();

        assert_eq!(contents, vec!["legacy-late", "new-early"]);
    }
}
