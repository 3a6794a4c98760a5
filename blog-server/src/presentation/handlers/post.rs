use crate::application::post_service::PostService;
use crate::data::post_repository::SqlitePostRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, CreatedResponse};
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;
use validator::Validate;

#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    posts: web::Data<PostService<SqlitePostRepository>>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let id = posts.create_post(payload.into()).await?;

    info!(
        request_id = %request_id(&req),
        post_id = id,
        "post created"
    );

    Ok(HttpResponse::Ok().json(CreatedResponse::post(id)))
}

#[get("/posts")]
pub async fn get_posts(
    req: HttpRequest,
    posts: web::Data<PostService<SqlitePostRepository>>,
) -> Result<HttpResponse, DomainError> {
    let posts = posts.get_posts().await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/{id}")]
pub async fn get_post(
    req: HttpRequest,
    posts: web::Data<PostService<SqlitePostRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let post = posts.get_post(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id,
        "post retrieved"
    );

    Ok(HttpResponse::Ok().json(post))
}
