/// Data models for board-service
///
/// This module defines the wire-level records:
/// - Post: top-level content record with a text body
/// - Comment: text record attached to a post
/// - PostWithComments: a post bundled with every comment referencing it
use serde::{Deserialize, Serialize};

/// Top-level content record.
///
/// The identifier is assigned at creation time and never changes; records
/// are never updated or deleted for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub body: String,
}

/// Text record attached to exactly one post via `post_id`.
///
/// The referenced post is not checked for existence at creation time, so a
/// comment may point at a post that was never created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub post_id: i64,
}

/// A post together with its comments in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}
