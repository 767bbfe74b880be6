/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::services::CommentService;
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Request body for creating a comment
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub body: String,
    pub post_id: i64,
}

/// Create a new comment
///
/// The referenced post is not required to exist.
pub async fn create_comment(
    state: web::Data<AppState>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new(state.comments.clone());
    let comment = service.create_comment(&req.body, req.post_id).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Get comments for a post
pub async fn get_post_comments(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = CommentService::new(state.comments.clone());
    let comments = service.get_post_comments(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}
