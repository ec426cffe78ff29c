#![allow(async_fn_in_trait)]

use uuid::Uuid;

use campusfind_domain::pagination::PageRequest;

use crate::domain::types::{
    ClaimantDetails, ClaimedItem, Feedback, FoundItem, ItemFilter, ItemKind, LostItem,
};
use crate::error::CatalogServiceError;

/// Repository for the active found-item pool.
pub trait FoundItemRepository: Send + Sync {
    async fn create(&self, item: &FoundItem) -> Result<(), CatalogServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoundItem>, CatalogServiceError>;
    async fn list(
        &self,
        filter: &ItemFilter,
        page: PageRequest,
    ) -> Result<Vec<FoundItem>, CatalogServiceError>;

    /// Atomically consume the found item and persist the claimed record in
    /// one transaction. The delete is guarded on `rows_affected == 1`, so of
    /// two concurrent claims on the same id exactly one returns the claimed
    /// record; the loser (and any claim on a missing id) gets `None`.
    async fn claim(
        &self,
        item_id: Uuid,
        claimant: ClaimantDetails,
    ) -> Result<Option<ClaimedItem>, CatalogServiceError>;
}

/// Repository for lost-item reports.
pub trait LostItemRepository: Send + Sync {
    async fn create(&self, item: &LostItem) -> Result<(), CatalogServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<LostItem>, CatalogServiceError>;
    async fn list(
        &self,
        filter: &ItemFilter,
        page: PageRequest,
    ) -> Result<Vec<LostItem>, CatalogServiceError>;
}

/// Repository for the claim audit trail.
pub trait ClaimedItemRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<ClaimedItem>, CatalogServiceError>;
}

/// Repository for user feedback.
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, feedback: &Feedback) -> Result<(), CatalogServiceError>;
}

/// Storage for uploaded item images.
pub trait ImageStore: Send + Sync {
    /// Persist one image under the pool's directory and return the
    /// generated file name. Names are generated server-side, never taken
    /// from the upload, so they cannot collide or traverse paths.
    async fn store(
        &self,
        kind: ItemKind,
        ext: &str,
        bytes: &[u8],
    ) -> Result<String, CatalogServiceError>;
}
