#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Otp, OutboxEvent, ProfileUpdate, User};
use crate::error::AuthServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;
    async fn create(&self, user: &User) -> Result<(), AuthServiceError>;
    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<(), AuthServiceError>;

    /// Update email and/or password hash. `None` leaves the field unchanged.
    async fn update_account(
        &self,
        id: Uuid,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<(), AuthServiceError>;

    /// Flip `verified` for the user with this email. No-op when no such
    /// user exists (pre-registration OTP verification).
    async fn mark_verified(&self, email: &str) -> Result<(), AuthServiceError>;
}

/// Repository for one-time verification codes.
pub trait OtpRepository: Send + Sync {
    /// Find the live (unexpired) code for an email. Expired rows are
    /// treated as absent.
    async fn find_live(&self, email: &str) -> Result<Option<Otp>, AuthServiceError>;

    /// Upsert the code for an email (replacing any prior code, resetting
    /// the attempt counter) and insert the delivery outbox event in the
    /// same transaction.
    async fn put_with_outbox(
        &self,
        otp: &Otp,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError>;

    /// Bump the attempt counter for an email with a single conditional
    /// update, capped at [`MAX_OTP_ATTEMPTS`](crate::domain::types::MAX_OTP_ATTEMPTS)
    /// so concurrent failures cannot exceed the limit.
    async fn record_failed_attempt(&self, email: &str) -> Result<(), AuthServiceError>;

    /// Delete the code for an email. Returns `true` if a row was deleted.
    async fn delete(&self, email: &str) -> Result<bool, AuthServiceError>;
}
