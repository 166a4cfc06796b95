//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use platform::password::HashedPassword;

use crate::domain::entity::{
    session::Session,
    user::{Credentials, NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, image_ref::ImageRef, user_id::UserId, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn purge_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

/// Map a unique-constraint violation to the matching domain error
///
/// The unique indexes are the final authority on username/e-mail
/// uniqueness; the use-case pre-checks only exist to give friendlier
/// errors without a write attempt.
fn map_unique_violation(e: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.code().as_deref() == Some("23505") {
            return match db_err.constraint() {
                Some("users_username_key") => AuthError::UsernameTaken,
                Some("users_email_key") => AuthError::EmailTaken,
                _ => AuthError::Database(e),
            };
        }
    }
    AuthError::Database(e)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, image_file, created_at
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(row.into_user())
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, image_file, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, image_file, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, image_file, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn credentials_by_email(&self, email: &Email) -> AuthResult<Option<Credentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT id, username, email, image_file, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialsRow::into_credentials).transpose()
    }

    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                image_file = $4
            WHERE id = $1
            "#,
        )
        .bind(user.user_id.as_i64())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.image.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                remember,
                expires_at_ms,
                created_at,
                last_activity_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_i64())
        .bind(session.remember)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        // Expiry is checked in the domain layer so stale rows can be
        // deleted lazily rather than silently filtered out.
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT session_id, user_id, remember, expires_at_ms, created_at, last_activity_at
            FROM auth_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE auth_sessions SET
                expires_at_ms = $2,
                last_activity_at = $3
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id)
        .bind(session.expires_at_ms)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.purge_expired_sessions().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    image_file: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_i64(self.id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            image: ImageRef::from_db(self.image_file),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: i64,
    username: String,
    email: String,
    image_file: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl CredentialsRow {
    fn into_credentials(self) -> AuthResult<Credentials> {
        let password_hash = HashedPassword::from_phc_string(&self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored hash: {e}")))?;

        Ok(Credentials {
            user: User {
                user_id: UserId::from_i64(self.id),
                username: UserName::from_db(self.username),
                email: Email::from_db(self.email),
                image: ImageRef::from_db(self.image_file),
                created_at: self.created_at,
            },
            password_hash,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: i64,
    remember: bool,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            user_id: UserId::from_i64(self.user_id),
            remember: self.remember,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            last_activity_at: self.last_activity_at,
        }
    }
}
