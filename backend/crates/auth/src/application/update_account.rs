//! Update Account Use Case
//!
//! Applies profile changes (username, e-mail, profile image). A
//! submission that changes nothing performs no write at all, so
//! repeated saves of the same form are harmless.

use std::sync::Arc;

use platform::image::ImageStore;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, image_ref::ImageRef, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Update account input
pub struct UpdateAccountInput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    /// Raw image bytes when the user picked a new profile picture
    pub image_data: Option<Vec<u8>>,
}

/// What happened to the account
pub enum UpdateOutcome {
    /// Something differed and was written
    Changed(User),
    /// Submission matched the current state; nothing was written
    Unchanged(User),
}

impl UpdateOutcome {
    pub fn user(&self) -> &User {
        match self {
            UpdateOutcome::Changed(user) | UpdateOutcome::Unchanged(user) => user,
        }
    }
}

/// Update account use case
pub struct UpdateAccountUseCase<U, I>
where
    U: UserRepository,
    I: ImageStore,
{
    user_repo: Arc<U>,
    image_store: Arc<I>,
}

impl<U, I> UpdateAccountUseCase<U, I>
where
    U: UserRepository,
    I: ImageStore,
{
    pub fn new(user_repo: Arc<U>, image_store: Arc<I>) -> Self {
        Self {
            user_repo,
            image_store,
        }
    }

    pub async fn execute(&self, input: UpdateAccountInput) -> AuthResult<UpdateOutcome> {
        let current = self
            .user_repo
            .find_by_id(input.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let username =
            UserName::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Duplicate checks skip the caller's own current values
        if username != current.username && self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if email != current.email && self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let image = match input.image_data {
            Some(data) => {
                let stored = self
                    .image_store
                    .store(&data)
                    .await
                    .map_err(|e| AuthError::Internal(e.to_string()))?;
                Some(ImageRef::new(stored).map_err(|e| AuthError::Internal(e.to_string()))?)
            }
            None => None,
        };

        match current.with_profile(username, email, image) {
            Some(updated) => {
                self.user_repo.update(&updated).await?;
                tracing::info!(user_id = %updated.user_id, "Account updated");
                Ok(UpdateOutcome::Changed(updated))
            }
            None => Ok(UpdateOutcome::Unchanged(current)),
        }
    }
}
