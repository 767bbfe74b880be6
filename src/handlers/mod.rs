/// HTTP handlers for board endpoints
///
/// This module contains handlers for:
/// - Posts: create a post, list all posts, fetch a post with its comments
/// - Comments: create a comment, list comments for a post
///
/// Request payloads are deserialized into typed structs, so missing or
/// mistyped fields never reach the service layer; extractor failures are
/// mapped to 422 responses here.
pub mod comments;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{create_comment, get_post_comments};
pub use posts::{create_post, get_post, list_posts};

use crate::error::AppError;
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest};

/// Register board routes and extractor configuration.
///
/// Shared by the server and the integration tests so both serve the same
/// contract, including the 422 mapping below.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/post", web::post().to(create_post))
        .route("/posts", web::get().to(list_posts))
        .route("/comment", web::post().to(create_comment))
        .route("/post/{post_id}", web::get().to(get_post))
        .route("/post/{post_id}/comment", web::get().to(get_post_comments));
}

/// Map JSON body extraction failures (missing fields, wrong types, invalid
/// JSON) to 422 instead of actix's default 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// Map path parameter failures (non-integer `post_id`) to 422.
fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}
