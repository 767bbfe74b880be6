/// Post service - handles post creation, listing, and aggregated retrieval
use crate::error::Result;
use crate::models::{Post, PostWithComments};
use crate::services::CommentService;
use crate::store::PostStore;

pub struct PostService {
    posts: PostStore,
}

impl PostService {
    pub fn new(posts: PostStore) -> Self {
        Self { posts }
    }

    /// Create a new post
    ///
    /// Payload shape is validated at the API boundary before this runs, so
    /// creation itself has no failure case.
    pub async fn create_post(&self, body: &str) -> Result<Post> {
        Ok(self.posts.append(body).await)
    }

    /// Get all posts in creation order
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.all().await)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        Ok(self.posts.get(post_id).await)
    }

    /// Get a post together with every comment referencing it
    ///
    /// Returns None without consulting the comment collection when the post
    /// does not exist.
    pub async fn get_post_with_comments(
        &self,
        post_id: i64,
        comments: &CommentService,
    ) -> Result<Option<PostWithComments>> {
        let post = match self.get_post(post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let comments = comments.get_post_comments(post_id).await?;

        Ok(Some(PostWithComments { post, comments }))
    }
}
