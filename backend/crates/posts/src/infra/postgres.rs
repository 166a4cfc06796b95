//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::{NewPost, Post, PostWithAuthor};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::page::{Page, PageRequest};
use crate::domain::value_object::title::PostTitle;
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &NewPost) -> PostResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(post.title.as_str())
        .bind(&post.content)
        .bind(post.author_id.as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    async fn find_by_id(&self, post_id: PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_with_author(&self, post_id: PostId) -> PostResult<Option<PostWithAuthor>> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT p.id, p.title, p.content, p.created_at, p.user_id,
                   u.username AS author_username, u.image_file AS author_image
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostWithAuthorRow::into_post_with_author))
    }

    async fn list_page(&self, request: PageRequest) -> PostResult<Page<PostWithAuthor>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        // Newest first; id breaks ties so the order is total even for
        // posts created in the same instant
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT p.id, p.title, p.content, p.created_at, p.user_id,
                   u.username AS author_username, u.image_file AS author_image
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        let items = rows
            .into_iter()
            .map(PostWithAuthorRow::into_post_with_author)
            .collect();

        Ok(Page::new(items, request, total as u64))
    }

    async fn list_page_by_author(
        &self,
        author_id: UserId,
        request: PageRequest,
    ) -> PostResult<Page<PostWithAuthor>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE user_id = $1")
            .bind(author_id.as_i64())
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT p.id, p.title, p.content, p.created_at, p.user_id,
                   u.username AS author_username, u.image_file AS author_image
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id.as_i64())
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        let items = rows
            .into_iter()
            .map(PostWithAuthorRow::into_post_with_author)
            .collect();

        Ok(Page::new(items, request, total as u64))
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3
            WHERE id = $1
            "#,
        )
        .bind(post.post_id.as_i64())
        .bind(post.title.as_str())
        .bind(&post.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> PostResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    user_id: i64,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_i64(self.id),
            author_id: UserId::from_i64(self.user_id),
            title: PostTitle::from_db(self.title),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    user_id: i64,
    author_username: String,
    author_image: String,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> PostWithAuthor {
        PostWithAuthor {
            post: Post {
                post_id: PostId::from_i64(self.id),
                author_id: UserId::from_i64(self.user_id),
                title: PostTitle::from_db(self.title),
                content: self.content,
                created_at: self.created_at,
            },
            author_username: self.author_username,
            author_image: self.author_image,
        }
    }
}
