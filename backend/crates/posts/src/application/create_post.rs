//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::post::{NewPost, Post};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::title::PostTitle;
use crate::error::{PostError, PostResult};

/// Create post input
pub struct CreatePostInput {
    pub author_id: UserId,
    pub title: String,
    pub content: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<Post> {
        let title =
            PostTitle::new(input.title).map_err(|e| PostError::Validation(e.to_string()))?;

        let content = input.content.trim().to_string();
        if content.is_empty() {
            return Err(PostError::Validation("Content cannot be empty".to_string()));
        }

        let post = self
            .post_repo
            .create(&NewPost {
                author_id: input.author_id,
                title,
                content,
            })
            .await?;

        tracing::info!(
            post_id = %post.post_id,
            author_id = %post.author_id,
            "Post created"
        );

        Ok(post)
    }
}
