use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};

use campusfind_auth_types::token::{SESSION_TTL_SECS, SessionClaims};

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::AuthServiceError;
use crate::usecase::password::verify_password;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_session_token(user: &User, secret: &str) -> Result<String, AuthServiceError> {
    let claims = SessionClaims {
        sub: user.id.to_string(),
        role: user.role,
        exp: now_secs() + SESSION_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AuthServiceError> {
        // Unknown email and bad password fail identically so the response
        // does not reveal which emails are registered.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        let ok = verify_password(input.password, user.password_hash.clone()).await?;
        if !ok {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = issue_session_token(&user, &self.jwt_secret)?;
        Ok(LoginOutput { user, token })
    }
}
