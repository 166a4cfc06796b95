//! Delete Post Use Case
//!
//! Owner-only, like updates.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId, caller_id: UserId) -> PostResult<()> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !post.is_owned_by(caller_id) {
            return Err(PostError::Forbidden);
        }

        self.post_repo.delete(post_id).await?;

        tracing::info!(post_id = %post_id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemPostRepo;
    use crate::domain::entity::post::Post;
    use crate::domain::value_object::title::PostTitle;
    use chrono::Utc;

    fn seeded_repo() -> Arc<MemPostRepo> {
        Arc::new(MemPostRepo::seeded(vec![Post {
            post_id: PostId::from_i64(1),
            author_id: UserId::from_i64(10),
            title: PostTitle::new("Hello").unwrap(),
            content: "First post".to_string(),
            created_at: Utc::now(),
        }]))
    }

    #[tokio::test]
    async fn test_non_owner_delete_is_forbidden_and_writes_nothing() {
        let repo = seeded_repo();
        let use_case = DeletePostUseCase::new(repo.clone());

        let result = use_case
            .execute(PostId::from_i64(1), UserId::from_i64(11))
            .await;

        assert!(matches!(result, Err(PostError::Forbidden)));
        assert_eq!(repo.writes(), 0);
        assert!(repo.find_by_id(PostId::from_i64(1)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_owner_delete_removes_the_post() {
        let repo = seeded_repo();
        let use_case = DeletePostUseCase::new(repo.clone());

        use_case
            .execute(PostId::from_i64(1), UserId::from_i64(10))
            .await
            .unwrap();

        assert!(repo.find_by_id(PostId::from_i64(1)).await.unwrap().is_none());
    }
}
