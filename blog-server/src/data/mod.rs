pub mod comment_repository;
pub mod post_repository;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = crate::infrastructure::database::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    crate::infrastructure::database::run_migrations(&pool)
        .await
        .expect("migrations");
    pool
}
