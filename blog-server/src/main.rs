use std::net::TcpListener;

use anyhow::Context;
use blog_server::infrastructure::config::AppConfig;
use blog_server::infrastructure::database::{create_pool, run_migrations};
use blog_server::infrastructure::logging::init_logging;
use blog_server::server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let pool = create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    server::run(listener, &config, pool)?.await?;
    Ok(())
}
