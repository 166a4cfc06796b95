//! Get Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::post::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId) -> PostResult<PostWithAuthor> {
        self.post_repo
            .find_with_author(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
