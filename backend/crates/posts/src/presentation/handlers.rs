//! HTTP Handlers
//!
//! The home feed is public; everything under `/posts` is gated by the
//! auth middleware. Ownership failures answer 403 and are never turned
//! into sign-in redirects.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use auth::application::require_authenticated;
use auth::domain::entity::identity::Identity;
use auth::domain::repository::UserRepository;
use auth::handlers::flash_redirect;
use platform::flash::{self, FlashMessage};

use kernel::id::PostId;

use crate::application::config::PostsConfig;
use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdateOutcome, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{
    CreatePostRequest, FeedResponse, PageQuery, PostDetailResponse, PostDto, UpdatePostRequest,
};

/// Shared state for posts handlers
#[derive(Clone)]
pub struct PostsAppState<P, U>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub post_repo: Arc<P>,
    pub user_repo: Arc<U>,
    pub config: Arc<PostsConfig>,
}

/// Path key for `/posts/{key}`: a numeric key addresses a post by id,
/// anything else is read as a username feed.
enum PostKey {
    Id(PostId),
    Username(String),
}

impl PostKey {
    fn parse(raw: &str) -> PostKey {
        match raw.parse::<i64>() {
            Ok(id) => PostKey::Id(PostId::from_i64(id)),
            Err(_) => PostKey::Username(raw.to_string()),
        }
    }
}

/// Update/delete routes only make sense for a numeric post id; a
/// username there is simply a post that does not exist.
fn numeric_key(raw: &str) -> PostResult<PostId> {
    match PostKey::parse(raw) {
        PostKey::Id(post_id) => Ok(post_id),
        PostKey::Username(_) => Err(PostError::NotFound),
    }
}

// ============================================================================
// Listings
// ============================================================================

/// GET /home (also mounted at /)
pub async fn home<P, U>(
    State(state): State<PostsAppState<P, U>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> PostResult<Response>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(
        state.post_repo.clone(),
        state.user_repo.clone(),
        state.config.clone(),
    );

    let page = use_case.home(query.page).await?;

    Ok(view(FeedResponse::new(page, flash::take_flash(&headers))))
}

/// GET /posts/{key}
///
/// Numeric key: post detail. Anything else: that user's feed.
pub async fn post_or_user_feed<P, U>(
    State(state): State<PostsAppState<P, U>>,
    Path(key): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> PostResult<Response>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    match PostKey::parse(&key) {
        PostKey::Id(post_id) => {
            let use_case = GetPostUseCase::new(state.post_repo.clone());
            let post = use_case.execute(post_id).await?;

            Ok(view(PostDetailResponse {
                post: PostDto::from(post),
                flash: flash::take_flash(&headers),
            }))
        }
        PostKey::Username(username) => {
            let use_case = ListPostsUseCase::new(
                state.post_repo.clone(),
                state.user_repo.clone(),
                state.config.clone(),
            );
            let page = use_case.by_username(&username, query.page).await?;

            Ok(view(FeedResponse::new(page, flash::take_flash(&headers))))
        }
    }
}

// ============================================================================
// Create
// ============================================================================

/// GET /posts/add
pub async fn add_post_view(headers: HeaderMap) -> Response {
    view(PendingFlash {
        flash: flash::take_flash(&headers),
    })
}

/// POST /posts/add
pub async fn create_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<Response>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let author_id = require_authenticated(&identity).map_err(PostError::from)?;

    let use_case = CreatePostUseCase::new(state.post_repo.clone());

    let input = CreatePostInput {
        author_id,
        title: req.title,
        content: req.content,
    };

    match use_case.execute(input).await {
        Ok(_) => Ok(flash_redirect(
            "/home",
            FlashMessage::success("Your post has been created!"),
        )),
        Err(e @ PostError::Validation(_)) => Ok(flash_redirect(
            "/posts/add",
            FlashMessage::error(e.to_string()),
        )),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Update
// ============================================================================

/// GET /posts/{id}/update
///
/// Edit form view: the post comes back for pre-filling, owner-only.
pub async fn update_post_view<P, U>(
    State(state): State<PostsAppState<P, U>>,
    Extension(identity): Extension<Identity>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> PostResult<Response>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller_id = require_authenticated(&identity).map_err(PostError::from)?;

    let use_case = GetPostUseCase::new(state.post_repo.clone());
    let post = use_case.execute(numeric_key(&key)?).await?;

    if !post.post.is_owned_by(caller_id) {
        return Err(PostError::Forbidden);
    }

    Ok(view(PostDetailResponse {
        post: PostDto::from(post),
        flash: flash::take_flash(&headers),
    }))
}

/// POST /posts/{id}/update
pub async fn update_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    Extension(identity): Extension<Identity>,
    Path(key): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> PostResult<Response>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let editor_id = require_authenticated(&identity).map_err(PostError::from)?;

    let post_id = numeric_key(&key)?;
    let use_case = UpdatePostUseCase::new(state.post_repo.clone());

    let input = UpdatePostInput {
        post_id,
        editor_id,
        title: req.title,
        content: req.content,
    };

    match use_case.execute(input).await {
        Ok(UpdateOutcome::Changed(post)) => Ok(flash_redirect(
            &format!("/posts/{}", post.post_id),
            FlashMessage::success("Your post has been updated!"),
        )),
        Ok(UpdateOutcome::Unchanged(post)) => Ok(flash_redirect(
            &format!("/posts/{}", post.post_id),
            FlashMessage::info("Nothing to update"),
        )),
        Err(e @ PostError::Validation(_)) => Ok(flash_redirect(
            &format!("/posts/{}/update", post_id),
            FlashMessage::error(e.to_string()),
        )),
        // NotFound and Forbidden are terminal, never redirects
        Err(e) => Err(e),
    }
}

// ============================================================================
// Delete
// ============================================================================

/// POST /posts/{id}/delete
pub async fn delete_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    Extension(identity): Extension<Identity>,
    Path(key): Path<String>,
) -> PostResult<Response>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller_id = require_authenticated(&identity).map_err(PostError::from)?;

    let use_case = DeletePostUseCase::new(state.post_repo.clone());
    use_case.execute(numeric_key(&key)?, caller_id).await?;

    Ok(flash_redirect(
        "/home",
        FlashMessage::success("Your post has been deleted!"),
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Minimal payload for form views that only carry flash messages
#[derive(serde::Serialize)]
struct PendingFlash {
    flash: Vec<FlashMessage>,
}

/// 200 view response that consumes pending flash messages
fn view<T: serde::Serialize>(payload: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, flash::clear_flash_header());

    (StatusCode::OK, headers, Json(payload)).into_response()
}
