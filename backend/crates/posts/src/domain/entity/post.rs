//! Post Entity
//!
//! A post belongs to exactly one author; authorship is fixed at
//! creation and never transferred.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::title::PostTitle;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Numeric identifier (BIGSERIAL)
    pub post_id: PostId,
    /// The owning user
    pub author_id: UserId,
    pub title: PostTitle,
    pub content: String,
    /// Created timestamp, set once at creation
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Check whether the given user owns this post
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Build the edited post for an update
    ///
    /// Returns `None` when title and content both match the current
    /// state, so callers can skip the write entirely.
    pub fn with_edit(&self, title: PostTitle, content: String) -> Option<Post> {
        if title == self.title && content == self.content {
            return None;
        }

        Some(Post {
            post_id: self.post_id,
            author_id: self.author_id,
            title,
            content,
            created_at: self.created_at,
        })
    }
}

/// A post as handed to the repository before the database has assigned
/// an id and creation timestamp.
#[derive(Debug)]
pub struct NewPost {
    pub author_id: UserId,
    pub title: PostTitle,
    pub content: String,
}

/// Read model: a post joined with its author's username for listings
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_username: String,
    pub author_image: String,
}
