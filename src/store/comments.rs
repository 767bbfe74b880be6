/// Append-only in-memory store for comments.
use crate::models::Comment;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds every comment created during the process lifetime.
///
/// Comment identifiers are assigned independently of post identifiers:
/// the next id is the current length of this sequence, claimed under the
/// write lock. Stored `post_id` values are opaque references; nothing here
/// checks that the referenced post exists.
#[derive(Clone)]
pub struct CommentStore {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl CommentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a new comment and return it with its assigned identifier.
    pub async fn append(&self, body: &str, post_id: i64) -> Comment {
        let mut comments = self.comments.write().await;
        let comment = Comment {
            id: comments.len() as i64,
            body: body.to_string(),
            post_id,
        };
        comments.push(comment.clone());
        comment
    }

    /// All comments whose `post_id` matches, in creation order.
    ///
    /// Linear scan over the full sequence; returns an empty vec when
    /// nothing matches.
    pub async fn by_post(&self, post_id: i64) -> Vec<Comment> {
        let comments = self.comments.read().await;
        comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect()
    }

    /// All comments in creation order.
    pub async fn all(&self) -> Vec<Comment> {
        self.comments.read().await.clone()
    }

    /// Number of comments stored.
    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    /// Whether the store holds no comments.
    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }

    /// Remove every record. Used by test harnesses to isolate cases.
    pub async fn clear(&self) {
        self.comments.write().await.clear();
    }
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}
