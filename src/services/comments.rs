/// Comment service - handles comment creation and per-post listing
use crate::error::Result;
use crate::models::Comment;
use crate::store::CommentStore;

pub struct CommentService {
    comments: CommentStore,
}

impl CommentService {
    pub fn new(comments: CommentStore) -> Self {
        Self { comments }
    }

    /// Create a new comment
    ///
    /// The referenced post is deliberately not checked for existence; a
    /// comment may point at a post that was never created.
    pub async fn create_comment(&self, body: &str, post_id: i64) -> Result<Comment> {
        Ok(self.comments.append(body, post_id).await)
    }

    /// Get comments for a post in creation order
    ///
    /// Returns an empty vec when the post has no comments; that is not an
    /// error.
    pub async fn get_post_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        Ok(self.comments.by_post(post_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_comment_echoes_input() {
        let service = CommentService::new(CommentStore::new());

        let comment = service.create_comment("Test comment", 0).await.unwrap();

        assert_eq!(comment.id, 0);
        assert_eq!(comment.body, "Test comment");
        assert_eq!(comment.post_id, 0);
    }

    #[tokio::test]
    async fn get_post_comments_filters_by_reference() {
        let service = CommentService::new(CommentStore::new());

        let kept = service.create_comment("kept", 1).await.unwrap();
        service.create_comment("skipped", 2).await.unwrap();

        assert_eq!(service.get_post_comments(1).await.unwrap(), vec![kept]);
        assert_eq!(service.get_post_comments(0).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn dangling_post_reference_is_accepted() {
        let service = CommentService::new(CommentStore::new());

        let comment = service.create_comment("dangling", 999).await.unwrap();

        assert_eq!(comment.post_id, 999);
    }
}
