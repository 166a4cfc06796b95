//! List Posts Use Cases
//!
//! The home feed lists everyone's posts; the author feed lists a single
//! user's posts under their username. Both are paginated, newest first.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::user_name::UserName;

use crate::application::config::PostsConfig;
use crate::domain::entity::post::PostWithAuthor;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::page::{Page, PageRequest};
use crate::error::{PostError, PostResult};

/// List posts use case
pub struct ListPostsUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    user_repo: Arc<U>,
    config: Arc<PostsConfig>,
}

impl<P, U> ListPostsUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(post_repo: Arc<P>, user_repo: Arc<U>, config: Arc<PostsConfig>) -> Self {
        Self {
            post_repo,
            user_repo,
            config,
        }
    }

    /// Home feed: one page of all posts
    pub async fn home(&self, page: Option<u32>) -> PostResult<Page<PostWithAuthor>> {
        let request = PageRequest::new(page, self.config.page_size);
        self.post_repo.list_page(request).await
    }

    /// Author feed: one page of the named user's posts
    ///
    /// An unknown username is a 404, unlike a page past the end which
    /// is just empty.
    pub async fn by_username(
        &self,
        username: &str,
        page: Option<u32>,
    ) -> PostResult<Page<PostWithAuthor>> {
        let username = UserName::new(username).map_err(|_| PostError::NotFound)?;

        let author = self
            .user_repo
            .find_by_username(&username)
            .await
            .map_err(PostError::from)?
            .ok_or(PostError::NotFound)?;

        let request = PageRequest::new(page, self.config.page_size);
        self.post_repo
            .list_page_by_author(author.user_id, request)
            .await
    }
}
