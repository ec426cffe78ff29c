use chrono::Utc;
use uuid::Uuid;

use campusfind_domain::email::is_institutional_email;
use campusfind_domain::user::UserRole;

use crate::domain::repository::{OtpRepository, UserRepository};
use crate::domain::types::User;
use crate::error::AuthServiceError;
use crate::usecase::otp::{delivery_event, fresh_otp};
use crate::usecase::password::hash_password;

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Create an unverified account and push the first verification OTP.
pub struct RegisterUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub users: U,
    pub otps: O,
    pub email_domain: String,
}

impl<U, O> RegisterUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<(), AuthServiceError> {
        if input.name.trim().is_empty() || input.password.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        if !is_institutional_email(&input.email, &self.email_domain) {
            return Err(AuthServiceError::NonInstitutionalEmail);
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AuthServiceError::UserAlreadyExists);
        }

        let password_hash = hash_password(input.password).await?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email.clone(),
            password_hash,
            phone: None,
            course: None,
            year: None,
            section: None,
            role: UserRole::Student.as_u8(),
            verified: false,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        let otp = fresh_otp(&input.email);
        let event = delivery_event(&otp);
        self.otps.put_with_outbox(&otp, &event).await
    }
}
