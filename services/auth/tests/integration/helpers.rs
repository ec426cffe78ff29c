use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use campusfind_auth::domain::repository::{OtpRepository, UserRepository};
use campusfind_auth::domain::types::{MAX_OTP_ATTEMPTS, Otp, OutboxEvent, ProfileUpdate, User};
use campusfind_auth::error::AuthServiceError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution
    /// inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = &update.name {
                u.name = name.clone();
            }
            if let Some(phone) = &update.phone {
                u.phone = Some(phone.clone());
            }
            if let Some(course) = &update.course {
                u.course = Some(course.clone());
            }
            if let Some(year) = &update.year {
                u.year = Some(year.clone());
            }
            if let Some(section) = &update.section {
                u.section = Some(section.clone());
            }
            u.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_account(
        &self,
        id: Uuid,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            if let Some(email) = email {
                u.email = email.to_owned();
                u.verified = false;
            }
            if let Some(hash) = password_hash {
                u.password_hash = hash.to_owned();
            }
            u.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.email == email) {
            u.verified = true;
        }
        Ok(())
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub otps: Arc<Mutex<Vec<Otp>>>,
    pub events: Arc<Mutex<Vec<OutboxEvent>>>,
}

impl MockOtpRepo {
    pub fn new(otps: Vec<Otp>) -> Self {
        Self {
            otps: Arc::new(Mutex::new(otps)),
            events: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn otps_handle(&self) -> Arc<Mutex<Vec<Otp>>> {
        Arc::clone(&self.otps)
    }

    pub fn events_handle(&self) -> Arc<Mutex<Vec<OutboxEvent>>> {
        Arc::clone(&self.events)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn find_live(&self, email: &str) -> Result<Option<Otp>, AuthServiceError> {
        Ok(self
            .otps
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.email == email && o.is_live())
            .cloned())
    }

    async fn put_with_outbox(
        &self,
        otp: &Otp,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError> {
        let mut otps = self.otps.lock().unwrap();
        otps.retain(|o| o.email != otp.email);
        otps.push(otp.clone());
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn record_failed_attempt(&self, email: &str) -> Result<(), AuthServiceError> {
        let mut otps = self.otps.lock().unwrap();
        if let Some(o) = otps
            .iter_mut()
            .find(|o| o.email == email && o.attempts < MAX_OTP_ATTEMPTS)
        {
            o.attempts += 1;
        }
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<bool, AuthServiceError> {
        let mut otps = self.otps.lock().unwrap();
        let before = otps.len();
        otps.retain(|o| o.email != email);
        Ok(otps.len() < before)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub const TEST_EMAIL_DOMAIN: &str = "@gla.ac.in";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

pub fn test_user(email: &str) -> User {
    User {
        id: Uuid::now_v7(),
        name: "Asha Verma".to_owned(),
        email: email.to_owned(),
        password_hash: String::new(),
        phone: None,
        course: None,
        year: None,
        section: None,
        role: 0,
        verified: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_otp(email: &str, code: &str) -> Otp {
    Otp {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        code: code.to_owned(),
        attempts: 0,
        expires_at: Utc::now() + Duration::seconds(600),
        created_at: Utc::now(),
    }
}

pub fn expired_otp(email: &str, code: &str) -> Otp {
    Otp {
        expires_at: Utc::now() - Duration::seconds(1),
        ..test_otp(email, code)
    }
}
