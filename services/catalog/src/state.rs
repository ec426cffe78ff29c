use sea_orm::DatabaseConnection;

use campusfind_core::health::ReadinessProbe;

use crate::infra::db::{
    DbClaimedItemRepository, DbFeedbackRepository, DbFoundItemRepository, DbLostItemRepository,
};
use crate::infra::storage::FsImageStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub image_store: FsImageStore,
}

impl AppState {
    pub fn found_repo(&self) -> DbFoundItemRepository {
        DbFoundItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn lost_repo(&self) -> DbLostItemRepository {
        DbLostItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn claimed_repo(&self) -> DbClaimedItemRepository {
        DbClaimedItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn feedback_repo(&self) -> DbFeedbackRepository {
        DbFeedbackRepository {
            db: self.db.clone(),
        }
    }
}

impl ReadinessProbe for AppState {
    async fn is_ready(&self) -> bool {
        self.db.ping().await.is_ok()
    }
}
