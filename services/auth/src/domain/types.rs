use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account. `password_hash` is a bcrypt hash and never leaves
/// this service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub section: Option<String>,
    pub role: u8,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-time email verification code. One outstanding code per email; a new
/// request replaces the previous one and resets the attempt counter.
#[derive(Debug, Clone)]
pub struct Otp {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub attempts: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Otp {
    pub fn is_live(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Outbox event for async delivery (the OTP email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub section: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.course.is_none()
            && self.year.is_none()
            && self.section.is_none()
    }
}

/// OTP length in digits.
pub const OTP_LEN: usize = 6;

/// OTP time-to-live in seconds (10 minutes).
pub const OTP_TTL_SECS: i64 = 600;

/// Maximum failed verification attempts before an OTP is rejected outright.
pub const MAX_OTP_ATTEMPTS: i32 = 3;
