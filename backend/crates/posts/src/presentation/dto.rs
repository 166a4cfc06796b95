//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use platform::flash::FlashMessage;

use crate::domain::entity::post::PostWithAuthor;
use crate::domain::value_object::page::Page;

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Listing page query
///
/// `page` is parsed leniently: a value that is not a positive number
/// falls back to the first page instead of failing the request.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

// ============================================================================
// Responses
// ============================================================================

/// Post author as shown next to a post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub username: String,
    pub image_file: String,
}

/// A single post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at_ms: i64,
    pub author: AuthorDto,
}

impl From<PostWithAuthor> for PostDto {
    fn from(item: PostWithAuthor) -> Self {
        Self {
            id: item.post.post_id.as_i64(),
            title: item.post.title.to_string(),
            content: item.post.content,
            created_at_ms: item.post.created_at.timestamp_millis(),
            author: AuthorDto {
                username: item.author_username,
                image_file: item.author_image,
            },
        }
    }
}

/// Paginated feed (home or per-author)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    #[serde(flatten)]
    pub page: Page<PostDto>,
    pub flash: Vec<FlashMessage>,
}

impl FeedResponse {
    pub fn new(page: Page<PostWithAuthor>, flash: Vec<FlashMessage>) -> Self {
        Self {
            page: page.map(PostDto::from),
            flash,
        }
    }
}

/// Post detail view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: PostDto,
    pub flash: Vec<FlashMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_parses_numbers() {
        let query: PageQuery = serde_json::from_str(r#"{"page":"3"}"#).unwrap();
        assert_eq!(query.page, Some(3));
    }

    #[test]
    fn test_page_query_falls_back_on_garbage() {
        let query: PageQuery = serde_json::from_str(r#"{"page":"abc"}"#).unwrap();
        assert_eq!(query.page, None);

        let query: PageQuery = serde_json::from_str(r#"{"page":"-1"}"#).unwrap();
        assert_eq!(query.page, None);
    }

    #[test]
    fn test_page_query_defaults_when_absent() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, None);
    }
}
