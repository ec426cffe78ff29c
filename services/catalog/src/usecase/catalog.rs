use uuid::Uuid;

use campusfind_domain::pagination::PageRequest;

use crate::domain::repository::{
    ClaimedItemRepository, FoundItemRepository, LostItemRepository,
};
use crate::domain::types::{ClaimedItem, FoundItem, ItemFilter, LostItem};
use crate::error::CatalogServiceError;

// ── Listings ─────────────────────────────────────────────────────────────────

pub struct ListFoundItemsUseCase<F: FoundItemRepository> {
    pub items: F,
}

impl<F: FoundItemRepository> ListFoundItemsUseCase<F> {
    pub async fn execute(
        &self,
        filter: ItemFilter,
        page: PageRequest,
    ) -> Result<Vec<FoundItem>, CatalogServiceError> {
        self.items.list(&filter, page.clamped()).await
    }
}

pub struct ListLostItemsUseCase<L: LostItemRepository> {
    pub items: L,
}

impl<L: LostItemRepository> ListLostItemsUseCase<L> {
    pub async fn execute(
        &self,
        filter: ItemFilter,
        page: PageRequest,
    ) -> Result<Vec<LostItem>, CatalogServiceError> {
        self.items.list(&filter, page.clamped()).await
    }
}

pub struct ListClaimedItemsUseCase<C: ClaimedItemRepository> {
    pub items: C,
}

impl<C: ClaimedItemRepository> ListClaimedItemsUseCase<C> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<ClaimedItem>, CatalogServiceError> {
        self.items.list(page.clamped()).await
    }
}

// ── Item details ─────────────────────────────────────────────────────────────

/// Detail lookup result; the found pool shadows the lost pool when an id
/// somehow exists in both.
#[derive(Debug, Clone)]
pub enum ItemDetails {
    Found(FoundItem),
    Lost(LostItem),
}

pub struct GetItemDetailsUseCase<F, L>
where
    F: FoundItemRepository,
    L: LostItemRepository,
{
    pub found: F,
    pub lost: L,
}

impl<F, L> GetItemDetailsUseCase<F, L>
where
    F: FoundItemRepository,
    L: LostItemRepository,
{
    pub async fn execute(&self, id: Uuid) -> Result<ItemDetails, CatalogServiceError> {
        if let Some(item) = self.found.find_by_id(id).await? {
            return Ok(ItemDetails::Found(item));
        }
        if let Some(item) = self.lost.find_by_id(id).await? {
            return Ok(ItemDetails::Lost(item));
        }
        Err(CatalogServiceError::ItemNotFound)
    }
}
