use crate::application::comment_service::CommentService;
use crate::data::comment_repository::SqliteCommentRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreateCommentRequest, CreatedResponse};
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;
use validator::Validate;

#[get("/posts/{id}/comments")]
pub async fn get_comments(
    req: HttpRequest,
    comments: web::Data<CommentService<SqliteCommentRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let comments = comments.get_comments(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id,
        count = comments.len(),
        "comments retrieved"
    );

    Ok(HttpResponse::Ok().json(comments))
}

#[post("/posts/{id}/comments")]
pub async fn create_comment(
    req: HttpRequest,
    comments: web::Data<CommentService<SqliteCommentRepository>>,
    path: web::Path<i64>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let payload = payload.into_inner();
    payload.validate()?;

    let id = comments
        .create_comment(payload.into_new_comment(post_id))
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id,
        comment_id = id,
        "comment created"
    );

    Ok(HttpResponse::Ok().json(CreatedResponse::comment(id)))
}
