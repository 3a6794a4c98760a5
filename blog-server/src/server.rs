use std::net::TcpListener;
use std::sync::Arc;

use crate::application::comment_service::CommentService;
use crate::application::post_service::PostService;
use crate::data::comment_repository::SqliteCommentRepository;
use crate::data::post_repository::SqlitePostRepository;
use crate::infrastructure::config::AppConfig;
use crate::presentation::handlers;
use crate::presentation::middleware::trace_request;
use crate::presentation::utils::{json_error_handler, path_error_handler};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::{DefaultHeaders, Logger, from_fn};
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

/// Services shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService<SqlitePostRepository>,
    pub comments: CommentService<SqliteCommentRepository>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            posts: PostService::new(Arc::new(SqlitePostRepository::new(pool.clone()))),
            comments: CommentService::new(Arc::new(SqliteCommentRepository::new(pool))),
        }
    }
}

/// Registers the `/api` routes, app data and extractor configs.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state.posts))
            .app_data(web::Data::new(state.comments))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health))
                    .service(handlers::post::get_posts)
                    .service(handlers::post::create_post)
                    .service(handlers::post::get_post)
                    .service(handlers::comment::get_comments)
                    .service(handlers::comment::create_comment),
            );
    }
}

pub fn run(listener: TcpListener, config: &AppConfig, pool: SqlitePool) -> std::io::Result<Server> {
    let state = AppState::new(pool);
    let config = config.clone();

    info!(address = ?listener.local_addr().ok(), "HTTP server starting");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(trace_request))
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(build_cors(&config))
            .configure(configure(state.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn build_cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if config.allows_any_origin() {
        return cors.allow_any_origin().send_wildcard();
    }

    config
        .cors_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
