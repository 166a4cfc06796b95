//! HTTP Handlers
//!
//! Browser-flow handlers: successful mutations answer with
//! `303 See Other` plus a flash cookie; form views return JSON payloads
//! and consume pending flash messages.

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

use platform::cookie::CookieConfig;
use platform::flash::{self, FlashMessage};
use platform::image::ImageStore;

use crate::application::config::AuthConfig;
use crate::application::{
    SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase, UpdateAccountInput,
    UpdateAccountUseCase, UpdateOutcome, redirect_target, require_authenticated,
};
use crate::domain::entity::identity::Identity;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountResponse, FormViewResponse, SignInRequest, SignUpRequest, UpdateAccountRequest,
};

/// Shared state for auth handlers
pub struct AuthAppState<R, I>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub image_store: Arc<I>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: the Arc fields clone regardless of whether `I` does.
impl<R, I> Clone for AuthAppState<R, I>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            image_store: self.image_store.clone(),
            config: self.config.clone(),
        }
    }
}

/// Query string carrying the post-sign-in redirect target
#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /signup
///
/// Already-authenticated visitors are bounced to the landing page
/// without touching the form.
pub async fn sign_up_view<R, I>(
    State(state): State<AuthAppState<R, I>>,
    Extension(identity): Extension<Identity>,
    headers: HeaderMap,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    if identity.is_authenticated() {
        return see_other(&state.config.default_landing);
    }

    form_view(&headers, None)
}

/// POST /signup
pub async fn sign_up<R, I>(
    State(state): State<AuthAppState<R, I>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    if identity.is_authenticated() {
        return Ok(see_other(&state.config.default_landing));
    }

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(user) => Ok(flash_redirect(
            &state.config.default_landing,
            FlashMessage::success(format!("Account created for {}!", user.username)),
        )),
        Err(
            e @ (AuthError::UsernameTaken | AuthError::EmailTaken | AuthError::Validation(_)),
        ) => Ok(flash_redirect(
            "/signup",
            FlashMessage::error(e.to_string()),
        )),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /signin
pub async fn sign_in_view<R, I>(
    State(state): State<AuthAppState<R, I>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<NextQuery>,
    headers: HeaderMap,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    if identity.is_authenticated() {
        return see_other(&state.config.default_landing);
    }

    form_view(&headers, query.next)
}

/// POST /signin
pub async fn sign_in<R, I>(
    State(state): State<AuthAppState<R, I>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<NextQuery>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    if identity.is_authenticated() {
        return Ok(see_other(&state.config.default_landing));
    }

    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let email = req.email.clone();
    let input = SignInInput {
        email: req.email,
        password: req.password,
        remember: req.remember_me,
    };

    let output = match use_case.execute(input).await {
        Ok(output) => output,
        Err(e @ (AuthError::EmailNotFound | AuthError::WrongPassword)) => {
            // Back to the sign-in form, keeping the redirect target alive
            let location = signin_location(&state.config, query.next.as_deref());
            return Ok(flash_redirect(&location, FlashMessage::error(e.to_string())));
        }
        Err(e) => return Err(e),
    };

    let target = redirect_target(query.next.as_deref(), &state.config.default_landing);
    let cookie = session_cookie_config(&state.config, output.remember);

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, header_value(target));
    headers.append(
        header::SET_COOKIE,
        platform::cookie::set_cookie_header(&cookie, &output.session_token),
    );
    headers.append(
        header::SET_COOKIE,
        flash::set_flash_header(&[FlashMessage::success(format!(
            "{email} successfully signed in"
        ))]),
    );

    Ok((StatusCode::SEE_OTHER, headers).into_response())
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /signout
///
/// Idempotent: works the same with a live session, a stale cookie, or
/// no cookie at all.
pub async fn sign_out<R, I>(
    State(state): State<AuthAppState<R, I>>,
    headers: HeaderMap,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // The cookie is cleared either way
        if let Err(e) = use_case.execute(&token).await {
            tracing::warn!(error = %e, "Sign-out cleanup failed");
        }
    }

    let cookie = session_cookie_config(&state.config, false);

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, header_value(&state.config.default_landing));
    headers.append(header::SET_COOKIE, header_value(&cookie.build_delete_cookie()));

    (StatusCode::SEE_OTHER, headers).into_response()
}

// ============================================================================
// Account
// ============================================================================

/// GET /account
pub async fn account_view<R, I>(
    State(state): State<AuthAppState<R, I>>,
    Extension(identity): Extension<Identity>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let user_id = require_authenticated(&identity)?;

    // Qualified: both repository traits on `R` name a `find_by_id`
    let user = UserRepository::find_by_id(&*state.repo, user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let pending = flash::take_flash(&headers);

    let mut response_headers = HeaderMap::new();
    response_headers.append(header::SET_COOKIE, flash::clear_flash_header());

    Ok((
        StatusCode::OK,
        response_headers,
        Json(AccountResponse::from_user(&user, pending)),
    )
        .into_response())
}

/// POST /account
pub async fn update_account<R, I>(
    State(state): State<AuthAppState<R, I>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<UpdateAccountRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let user_id = require_authenticated(&identity)?;

    let image_data = match req.image_base64 {
        Some(b64) => match platform::crypto::from_base64(&b64) {
            Ok(data) => Some(data),
            Err(_) => {
                return Ok(flash_redirect(
                    "/account",
                    FlashMessage::error("Could not read the uploaded image"),
                ));
            }
        },
        None => None,
    };

    let use_case = UpdateAccountUseCase::new(state.repo.clone(), state.image_store.clone());

    let input = UpdateAccountInput {
        user_id,
        username: req.username,
        email: req.email,
        image_data,
    };

    match use_case.execute(input).await {
        Ok(UpdateOutcome::Changed(_)) => Ok(flash_redirect(
            "/account",
            FlashMessage::success("Your account has been updated!"),
        )),
        Ok(UpdateOutcome::Unchanged(_)) => Ok(flash_redirect(
            "/account",
            FlashMessage::info("Nothing to update"),
        )),
        Err(
            e @ (AuthError::UsernameTaken | AuthError::EmailTaken | AuthError::Validation(_)),
        ) => Ok(flash_redirect(
            "/account",
            FlashMessage::error(e.to_string()),
        )),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Session cookie for the given remember flag
///
/// Without "Remember Me" the cookie carries no Max-Age, so the browser
/// drops it when it closes. With it, Max-Age matches the long TTL.
pub fn session_cookie_config(config: &AuthConfig, remember: bool) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: remember.then(|| config.session_ttl_long.as_secs() as i64),
    }
}

/// Sign-in page location, preserving the redirect target when present
pub fn signin_location(config: &AuthConfig, next: Option<&str>) -> String {
    match next {
        Some(next) if !next.is_empty() => {
            let query: String = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("next", next)
                .finish();
            format!("{}?{}", config.signin_path, query)
        }
        _ => config.signin_path.clone(),
    }
}

fn header_value(s: &str) -> header::HeaderValue {
    header::HeaderValue::from_str(s).unwrap_or_else(|_| header::HeaderValue::from_static("/"))
}

/// Plain 303 redirect
pub fn see_other(location: &str) -> Response {
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, header_value(location))],
    )
        .into_response()
}

/// 303 redirect with a flash message attached
pub fn flash_redirect(location: &str, message: FlashMessage) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, header_value(location));
    headers.append(header::SET_COOKIE, flash::set_flash_header(&[message]));

    (StatusCode::SEE_OTHER, headers).into_response()
}

/// Form view payload with pending flash taken and cleared
fn form_view(request_headers: &HeaderMap, next: Option<String>) -> Response {
    let pending = flash::take_flash(request_headers);

    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, flash::clear_flash_header());

    (
        StatusCode::OK,
        headers,
        Json(FormViewResponse {
            flash: pending,
            next,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::Session;
    use crate::domain::entity::user::{Credentials, NewUser, User};
    use crate::domain::value_object::{
        email::Email, image_ref::ImageRef, user_id::UserId, user_name::UserName,
    };
    use platform::image::ImageStoreError;
    use platform::password::HashedPassword;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct MemAuthRepo {
        users: Arc<Mutex<Vec<(User, HashedPassword)>>>,
        sessions: Arc<Mutex<Vec<Session>>>,
    }

    impl UserRepository for MemAuthRepo {
        async fn create(&self, user: &NewUser) -> AuthResult<User> {
            let mut users = self.users.lock().unwrap();
            let created = User {
                user_id: UserId::from_i64(users.len() as i64 + 1),
                username: user.username.clone(),
                email: user.email.clone(),
                image: ImageRef::default(),
                created_at: chrono::Utc::now(),
            };
            users.push((created.clone(), user.password_hash.clone()));
            Ok(created)
        }

        async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|(u, _)| u.user_id == user_id)
                .map(|(u, _)| u.clone()))
        }

        async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|(u, _)| &u.username == username)
                .map(|(u, _)| u.clone()))
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|(u, _)| &u.email == email)
                .map(|(u, _)| u.clone()))
        }

        async fn credentials_by_email(&self, email: &Email) -> AuthResult<Option<Credentials>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|(u, _)| &u.email == email)
                .map(|(u, hash)| Credentials {
                    user: u.clone(),
                    password_hash: hash.clone(),
                }))
        }

        async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|(u, _)| &u.username == username))
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|(u, _)| &u.email == email))
        }

        async fn update(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            if let Some(entry) = users.iter_mut().find(|(u, _)| u.user_id == user.user_id) {
                entry.0 = user.clone();
            }
            Ok(())
        }
    }

    impl SessionRepository for MemAuthRepo {
        async fn create(&self, session: &Session) -> AuthResult<()> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }

        async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
            let sessions = self.sessions.lock().unwrap();
            Ok(sessions
                .iter()
                .find(|s| s.session_id == session_id)
                .cloned())
        }

        async fn update(&self, session: &Session) -> AuthResult<()> {
            let mut sessions = self.sessions.lock().unwrap();
            if let Some(entry) = sessions
                .iter_mut()
                .find(|s| s.session_id == session.session_id)
            {
                *entry = session.clone();
            }
            Ok(())
        }

        async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
            self.sessions
                .lock()
                .unwrap()
                .retain(|s| s.session_id != session_id);
            Ok(())
        }

        async fn cleanup_expired(&self) -> AuthResult<u64> {
            let mut sessions = self.sessions.lock().unwrap();
            let before = sessions.len();
            sessions.retain(|s| !s.is_expired());
            Ok((before - sessions.len()) as u64)
        }
    }

    // Deliberately not Clone: the state must clone via its Arcs alone
    struct MemImages;

    impl ImageStore for MemImages {
        async fn store(&self, _data: &[u8]) -> Result<String, ImageStoreError> {
            Ok("stored.jpg".to_string())
        }
    }

    fn test_state() -> AuthAppState<MemAuthRepo, MemImages> {
        AuthAppState {
            repo: Arc::new(MemAuthRepo::default()),
            image_store: Arc::new(MemImages),
            config: Arc::new(AuthConfig::development()),
        }
    }

    fn location_of(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_state_clones_without_cloneable_image_store() {
        let state = test_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.repo, &cloned.repo));
    }

    #[tokio::test]
    async fn test_sign_up_lands_on_home() {
        let state = test_state();

        let response = sign_up(
            State(state.clone()),
            Extension(Identity::Anonymous),
            Json(SignUpRequest {
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "correct horse battery".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location_of(&response), state.config.default_landing);
    }

    #[tokio::test]
    async fn test_account_view_shows_the_signed_in_user() {
        let state = test_state();

        let hash = platform::password::ClearTextPassword::new("correct horse battery".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        let user = UserRepository::create(
            &*state.repo,
            &NewUser {
                username: UserName::new("ada").unwrap(),
                email: Email::new("ada@example.com").unwrap(),
                password_hash: hash,
            },
        )
        .await
        .unwrap();

        let identity = Identity::Authenticated {
            user_id: user.user_id,
            session_id: Uuid::new_v4(),
        };

        let response = account_view(State(state), Extension(identity), HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_account_view_for_unknown_user_fails() {
        let state = test_state();

        let identity = Identity::Authenticated {
            user_id: UserId::from_i64(404),
            session_id: Uuid::new_v4(),
        };

        let result = account_view(State(state), Extension(identity), HeaderMap::new()).await;

        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }
}
