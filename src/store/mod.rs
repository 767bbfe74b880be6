/// In-memory storage layer
///
/// This module provides:
/// - Append-only stores for posts and comments
/// - Identifier assignment as "current length of the sequence"
///
/// Both stores are process-local and non-persistent; everything is lost on
/// process exit. Writes to a collection are serialized through its write
/// lock so identifier assignment stays strictly increasing and gap-free.
pub mod comments;
pub mod posts;

pub use comments::CommentStore;
pub use posts::PostStore;
