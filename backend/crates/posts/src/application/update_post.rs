//! Update Post Use Case
//!
//! Owner-only. An edit identical to the current state performs no
//! write, so the creation timestamp never churns.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::title::PostTitle;
use crate::error::{PostError, PostResult};

/// Update post input
pub struct UpdatePostInput {
    pub post_id: PostId,
    /// The caller, checked against the post's author
    pub editor_id: UserId,
    pub title: String,
    pub content: String,
}

/// What happened to the post
pub enum UpdateOutcome {
    /// Something differed and was written
    Changed(Post),
    /// Submission matched the current state; nothing was written
    Unchanged(Post),
}

impl UpdateOutcome {
    pub fn post(&self) -> &Post {
        match self {
            UpdateOutcome::Changed(post) | UpdateOutcome::Unchanged(post) => post,
        }
    }
}

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<UpdateOutcome> {
        let current = self
            .post_repo
            .find_by_id(input.post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        // Existence is checked before ownership: a missing post is 404
        // for everyone, only a real post can be forbidden.
        if !current.is_owned_by(input.editor_id) {
            return Err(PostError::Forbidden);
        }

        let title =
            PostTitle::new(input.title).map_err(|e| PostError::Validation(e.to_string()))?;

        let content = input.content.trim().to_string();
        if content.is_empty() {
            return Err(PostError::Validation("Content cannot be empty".to_string()));
        }

        match current.with_edit(title, content) {
            Some(edited) => {
                self.post_repo.update(&edited).await?;
                tracing::info!(post_id = %edited.post_id, "Post updated");
                Ok(UpdateOutcome::Changed(edited))
            }
            None => Ok(UpdateOutcome::Unchanged(current)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemPostRepo;
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

    fn edit(editor: i64) -> UpdatePostInput {
        UpdatePostInput {
            post_id: PostId::from_i64(1),
            editor_id: UserId::from_i64(editor),
            title: "Rewritten".to_string(),
            content: "Other words".to_string(),
        }
    }

    #[tokio::test]
    async fn test_non_owner_update_is_forbidden_and_writes_nothing() {
        let repo = seeded_repo();
        let use_case = UpdatePostUseCase::new(repo.clone());

        let result = use_case.execute(edit(11)).await;

        assert!(matches!(result, Err(PostError::Forbidden)));
        assert_eq!(repo.writes(), 0);

        let stored = repo.find_by_id(PostId::from_i64(1)).await.unwrap().unwrap();
        assert_eq!(stored.title.as_str(), "Hello");
        assert_eq!(stored.content, "First post");
    }

    #[tokio::test]
    async fn test_owner_update_is_written() {
        let repo = seeded_repo();
        let use_case = UpdatePostUseCase::new(repo.clone());

        let outcome = use_case.execute(edit(10)).await.unwrap();

        assert!(matches!(outcome, UpdateOutcome::Changed(_)));
        assert_eq!(repo.writes(), 1);
        assert_eq!(outcome.post().title.as_str(), "Rewritten");
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found_even_for_strangers() {
        let repo = seeded_repo();
        let use_case = UpdatePostUseCase::new(repo.clone());

        let mut input = edit(11);
        input.post_id = PostId::from_i64(99);
        let result = use_case.execute(input).await;

        assert!(matches!(result, Err(PostError::NotFound)));
    }
}
