/// Business logic layer for board-service
///
/// This module provides high-level operations:
/// - Post service: post creation, listing, and aggregated retrieval
/// - Comment service: comment creation and per-post listing
pub mod comments;
pub mod posts;

// Re-export commonly used services
pub use comments::CommentService;
pub use posts::PostService;
