//! In-memory repository for use case tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use kernel::id::{PostId, UserId};

use crate::domain::entity::post::{NewPost, Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::page::{Page, PageRequest};
use crate::error::PostResult;

/// In-memory post store counting write operations, so tests can assert
/// that a rejected mutation touched nothing.
#[derive(Default)]
pub(crate) struct MemPostRepo {
    posts: Mutex<Vec<Post>>,
    writes: AtomicU64,
}

impl MemPostRepo {
    pub(crate) fn seeded(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of create/update/delete calls so far
    pub(crate) fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn with_author(post: Post) -> PostWithAuthor {
        PostWithAuthor {
            post,
            author_username: "someone".to_string(),
            author_image: "default.jpg".to_string(),
        }
    }
}

impl PostRepository for MemPostRepo {
    async fn create(&self, post: &NewPost) -> PostResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let created = Post {
            post_id: PostId::from_i64(posts.len() as i64 + 1),
            author_id: post.author_id,
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: Utc::now(),
        };
        posts.push(created.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(created)
    }

    async fn find_by_id(&self, post_id: PostId) -> PostResult<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.post_id == post_id).cloned())
    }

    async fn find_with_author(&self, post_id: PostId) -> PostResult<Option<PostWithAuthor>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .find(|p| p.post_id == post_id)
            .cloned()
            .map(Self::with_author))
    }

    async fn list_page(&self, request: PageRequest) -> PostResult<Page<PostWithAuthor>> {
        let posts = self.posts.lock().unwrap();
        let total = posts.len() as u64;
        let items = posts
            .iter()
            .rev()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .map(Self::with_author)
            .collect();
        Ok(Page::new(items, request, total))
    }

    async fn list_page_by_author(
        &self,
        author_id: UserId,
        request: PageRequest,
    ) -> PostResult<Page<PostWithAuthor>> {
        let posts = self.posts.lock().unwrap();
        let by_author: Vec<&Post> = posts.iter().filter(|p| p.author_id == author_id).collect();
        let total = by_author.len() as u64;
        let items = by_author
            .into_iter()
            .rev()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .map(Self::with_author)
            .collect();
        Ok(Page::new(items, request, total))
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(entry) = posts.iter_mut().find(|p| p.post_id == post.post_id) {
            *entry = post.clone();
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> PostResult<()> {
        self.posts
            .lock()
            .unwrap()
            .retain(|p| p.post_id != post_id);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
