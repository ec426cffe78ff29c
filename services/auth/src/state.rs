use sea_orm::DatabaseConnection;

use campusfind_auth_types::session::SessionSecret;
use campusfind_core::health::ReadinessProbe;

use crate::infra::db::{DbOtpRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub email_domain: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }
}

impl SessionSecret for AppState {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl ReadinessProbe for AppState {
    async fn is_ready(&self) -> bool {
        self.db.ping().await.is_ok()
    }
}
