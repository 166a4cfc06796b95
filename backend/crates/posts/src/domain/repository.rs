//! Repository Trait
//!
//! Interface for post persistence. Implementation is in infrastructure
//! layer.

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::{NewPost, Post, PostWithAuthor};
use crate::domain::value_object::page::{Page, PageRequest};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post, returning the persisted row with its
    /// database-assigned id and creation timestamp
    async fn create(&self, post: &NewPost) -> PostResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: PostId) -> PostResult<Option<Post>>;

    /// Find post with its author for the detail view
    async fn find_with_author(&self, post_id: PostId) -> PostResult<Option<PostWithAuthor>>;

    /// One page of all posts, newest first
    async fn list_page(&self, request: PageRequest) -> PostResult<Page<PostWithAuthor>>;

    /// One page of a single author's posts, newest first
    async fn list_page_by_author(
        &self,
        author_id: UserId,
        request: PageRequest,
    ) -> PostResult<Page<PostWithAuthor>>;

    /// Update title and content
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Delete a post
    async fn delete(&self, post_id: PostId) -> PostResult<()>;
}
