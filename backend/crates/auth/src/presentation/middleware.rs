//! Auth Middleware
//!
//! Two layers: `resolve_identity` turns the session cookie into an
//! [`Identity`] extension on every request, and `require_auth` bounces
//! anonymous requests to the sign-in page with the original path in
//! `next`.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::SessionRepository;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Resolve the request identity from the session cookie
///
/// Always succeeds; handlers downstream find an `Identity` extension,
/// `Anonymous` when no usable session was presented.
pub async fn resolve_identity<R>(
    axum::extract::State(state): axum::extract::State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let identity = use_case.resolve(token.as_deref()).await;

    req.extensions_mut().insert(identity);

    next.run(req).await
}

/// Require an authenticated identity
///
/// Anonymous requests get `303 See Other` to the sign-in page carrying
/// the original path (including query) as `next`, so a later successful
/// sign-in can land where the user was headed.
pub async fn require_auth<R>(
    axum::extract::State(state): axum::extract::State<AuthMiddlewareState<R>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let authenticated = req
        .extensions()
        .get::<Identity>()
        .is_some_and(Identity::is_authenticated);

    if !authenticated {
        let original = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());

        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("next", &original)
            .finish();
        let location = format!("{}?{}", state.config.signin_path, query);

        let location = header::HeaderValue::from_str(&location)
            .unwrap_or_else(|_| header::HeaderValue::from_static("/signin"));

        return (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response();
    }

    next.run(req).await
}
