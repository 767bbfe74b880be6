/// Append-only in-memory store for posts.
use crate::models::Post;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds every post created during the process lifetime.
///
/// Thread-safe store using Arc<RwLock<>> for shared state. The record
/// identifier doubles as its position in the sequence, so lookups are a
/// bounds check and the next identifier is the current length, claimed
/// under the write lock.
#[derive(Clone)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a new post and return it with its assigned identifier.
    pub async fn append(&self, body: &str) -> Post {
        let mut posts = self.posts.write().await;
        let post = Post {
            id: posts.len() as i64,
            body: body.to_string(),
        };
        posts.push(post.clone());
        post
    }

    /// Fetch a post by identifier.
    ///
    /// Returns None for identifiers outside `0..len`, including negative
    /// ones.
    pub async fn get(&self, post_id: i64) -> Option<Post> {
        if post_id < 0 {
            return None;
        }
        let posts = self.posts.read().await;
        posts.get(post_id as usize).cloned()
    }

    /// All posts in creation order.
    pub async fn all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Number of posts stored.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Whether the store holds no posts.
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Remove every record. Used by test harnesses to isolate cases.
    pub async fn clear(&self) {
        self.posts.write().await.clear();
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
