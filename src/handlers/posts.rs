/// Post handlers - HTTP endpoints for post operations
use crate::error::{AppError, Result};
use crate::services::{CommentService, PostService};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Request body for creating a post
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub body: String,
}

/// Create a new post
pub async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new(state.posts.clone());
    let post = service.create_post(&req.body).await?;

    Ok(HttpResponse::Created().json(post))
}

/// List all posts in creation order
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let service = PostService::new(state.posts.clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post together with its comments
pub async fn get_post(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = PostService::new(state.posts.clone());
    let comments = CommentService::new(state.comments.clone());

    match service.get_post_with_comments(*post_id, &comments).await? {
        Some(page) => Ok(HttpResponse::Ok().json(page)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}
