//! Posts Router
//!
//! Only the home feed is public; everything under `/posts` sits behind
//! the auth crate's `require_auth` middleware, which captures the
//! original path as `next` for the sign-in redirect.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::infra::postgres::PgAuthRepository;
use auth::middleware::{AuthMiddlewareState, require_auth};

use crate::application::config::PostsConfig;
use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router with PostgreSQL repositories
pub fn posts_router(
    post_repo: PgPostRepository,
    user_repo: Arc<PgAuthRepository>,
    mw_state: AuthMiddlewareState<PgAuthRepository>,
    config: PostsConfig,
) -> Router {
    posts_router_generic(post_repo, user_repo, mw_state, config)
}

/// Create a generic Posts router for any repository implementations
pub fn posts_router_generic<P, U, S>(
    post_repo: P,
    user_repo: Arc<U>,
    mw_state: AuthMiddlewareState<S>,
    config: PostsConfig,
) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        post_repo: Arc::new(post_repo),
        user_repo,
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route(
            "/posts/add",
            get(handlers::add_post_view).post(handlers::create_post::<P, U>),
        )
        .route(
            "/posts/{key}/update",
            get(handlers::update_post_view::<P, U>).post(handlers::update_post::<P, U>),
        )
        .route("/posts/{key}/delete", post(handlers::delete_post::<P, U>))
        .route("/posts/{key}", get(handlers::post_or_user_feed::<P, U>))
        .route_layer(from_fn_with_state(mw_state, require_auth::<S>));

    Router::new()
        .route("/", get(handlers::home::<P, U>))
        .route("/home", get(handlers::home::<P, U>))
        .merge(protected)
        .with_state(state)
}
