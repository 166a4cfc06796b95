//! Auth Router

use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use platform::image::{FsImageStore, ImageStore};

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository and filesystem
/// image store
pub fn auth_router(
    repo: PgAuthRepository,
    image_store: FsImageStore,
    config: Arc<AuthConfig>,
) -> Router {
    auth_router_generic(repo, image_store, config)
}

/// Create a generic Auth router for any repository / image store
/// implementation
pub fn auth_router_generic<R, I>(repo: R, image_store: I, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let repo = Arc::new(repo);

    let state = AuthAppState {
        repo: repo.clone(),
        image_store: Arc::new(image_store),
        config: config.clone(),
    };

    let mw_state = AuthMiddlewareState { repo, config };

    let protected = Router::new()
        .route(
            "/account",
            get(handlers::account_view::<R, I>).post(handlers::update_account::<R, I>),
        )
        .route_layer(from_fn_with_state(mw_state, require_auth::<R>));

    Router::new()
        .route(
            "/signup",
            get(handlers::sign_up_view::<R, I>).post(handlers::sign_up::<R, I>),
        )
        .route(
            "/signin",
            get(handlers::sign_in_view::<R, I>).post(handlers::sign_in::<R, I>),
        )
        .route("/signout", get(handlers::sign_out::<R, I>))
        .merge(protected)
        .with_state(state)
}
