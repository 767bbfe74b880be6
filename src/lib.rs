/// Board Service Library
///
/// Handles post and comment endpoints backed by process-local, in-memory
/// storage. Records are append-only: nothing is ever updated or deleted for
/// the lifetime of the process, and everything is lost on restart.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Data structures for posts and comments
/// - `services`: Business logic layer
/// - `store`: Append-only in-memory storage layer
/// - `middleware`: HTTP middleware for request metrics
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};

use store::{CommentStore, PostStore};

/// Shared application state injected into every handler.
///
/// Storage is owned here rather than living in module globals so tests can
/// build isolated instances and reset them deterministically.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub comments: CommentStore,
}

impl AppState {
    /// Create state with empty collections
    pub fn new() -> Self {
        Self {
            posts: PostStore::new(),
            comments: CommentStore::new(),
        }
    }

    /// Clear both collections. Intended for test harnesses that reuse one
    /// process across cases.
    pub async fn reset(&self) {
        self.posts.clear().await;
        self.comments.clear().await;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
