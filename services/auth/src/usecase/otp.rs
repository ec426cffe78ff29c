use chrono::{Duration, Utc};
use rand::RngExt;
use serde_json::json;
use uuid::Uuid;

use campusfind_domain::email::is_institutional_email;

use crate::domain::repository::{OtpRepository, UserRepository};
use crate::domain::types::{MAX_OTP_ATTEMPTS, OTP_LEN, OTP_TTL_SECS, Otp, OutboxEvent};
use crate::error::AuthServiceError;

/// Generate a zero-padded numeric code of [`OTP_LEN`] digits.
fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_LEN)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

pub(crate) fn fresh_otp(email: &str) -> Otp {
    let now = Utc::now();
    Otp {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        code: generate_code(),
        attempts: 0,
        expires_at: now + Duration::seconds(OTP_TTL_SECS),
        created_at: now,
    }
}

pub(crate) fn delivery_event(otp: &Otp) -> OutboxEvent {
    OutboxEvent {
        id: Uuid::new_v4(),
        kind: "otp_requested".to_owned(),
        payload: json!({ "email": otp.email, "code": otp.code }),
        idempotency_key: format!("otp_requested:{}", otp.id),
    }
}

// ── SendOtp (pre-registration) ───────────────────────────────────────────────

pub struct SendOtpInput {
    pub email: String,
}

pub struct SendOtpUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub users: U,
    pub otps: O,
    pub email_domain: String,
}

impl<U, O> SendOtpUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub async fn execute(&self, input: SendOtpInput) -> Result<(), AuthServiceError> {
        if !is_institutional_email(&input.email, &self.email_domain) {
            return Err(AuthServiceError::NonInstitutionalEmail);
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AuthServiceError::UserAlreadyExists);
        }

        let otp = fresh_otp(&input.email);
        let event = delivery_event(&otp);
        self.otps.put_with_outbox(&otp, &event).await
    }
}

// ── ResendOtp (post-registration, unverified user) ───────────────────────────

pub struct ResendOtpInput {
    pub email: String,
}

pub struct ResendOtpUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub users: U,
    pub otps: O,
}

impl<U, O> ResendOtpUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub async fn execute(&self, input: ResendOtpInput) -> Result<(), AuthServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;
        if user.verified {
            return Err(AuthServiceError::AlreadyVerified);
        }

        let otp = fresh_otp(&input.email);
        let event = delivery_event(&otp);
        self.otps.put_with_outbox(&otp, &event).await
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub code: String,
}

pub struct VerifyOtpUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub users: U,
    pub otps: O,
}

impl<U, O> VerifyOtpUseCase<U, O>
where
    U: UserRepository,
    O: OtpRepository,
{
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), AuthServiceError> {
        // Expired rows read as absent, so TTL needs no sweeper here.
        let otp = self
            .otps
            .find_live(&input.email)
            .await?
            .ok_or(AuthServiceError::InvalidOtp)?;

        if otp.attempts >= MAX_OTP_ATTEMPTS {
            return Err(AuthServiceError::TooManyOtpAttempts);
        }

        if otp.code != input.code {
            self.otps.record_failed_attempt(&input.email).await?;
            return Err(AuthServiceError::InvalidOtp);
        }

        // Delete first: the code must never verify twice even if the
        // mark_verified write fails afterwards.
        self.otps.delete(&input.email).await?;
        self.users.mark_verified(&input.email).await?;
        Ok(())
    }
}
