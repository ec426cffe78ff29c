use uuid::Uuid;

use campusfind_domain::email::is_institutional_email;

use crate::domain::repository::UserRepository;
use crate::domain::types::{ProfileUpdate, User};
use crate::error::AuthServiceError;
use crate::usecase::password::{hash_password, verify_password};

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AuthServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, AuthServiceError> {
        if update.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;
        self.repo.update_profile(user_id, &update).await?;
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

// ── UpdateAccount (email / password change) ──────────────────────────────────

pub struct UpdateAccountInput {
    pub new_email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub struct UpdateAccountUseCase<R: UserRepository> {
    pub repo: R,
    pub email_domain: String,
}

impl<R: UserRepository> UpdateAccountUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateAccountInput,
    ) -> Result<User, AuthServiceError> {
        if input.new_email.is_none() && input.new_password.is_none() {
            return Err(AuthServiceError::MissingData);
        }

        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let new_email = match input.new_email {
            Some(email) if email != user.email => {
                if !is_institutional_email(&email, &self.email_domain) {
                    return Err(AuthServiceError::NonInstitutionalEmail);
                }
                if self.repo.find_by_email(&email).await?.is_some() {
                    return Err(AuthServiceError::UserAlreadyExists);
                }
                Some(email)
            }
            _ => None,
        };

        let new_hash = match input.new_password {
            Some(password) => {
                // A password change must prove knowledge of the current one.
                let current = input
                    .current_password
                    .ok_or(AuthServiceError::WrongPassword)?;
                let ok = verify_password(current, user.password_hash.clone()).await?;
                if !ok {
                    return Err(AuthServiceError::WrongPassword);
                }
                Some(hash_password(password).await?)
            }
            None => None,
        };

        self.repo
            .update_account(user_id, new_email.as_deref(), new_hash.as_deref())
            .await?;
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}
