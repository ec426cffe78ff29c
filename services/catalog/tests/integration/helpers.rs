use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use campusfind_catalog::domain::repository::{
    ClaimedItemRepository, FeedbackRepository, FoundItemRepository, ImageStore, LostItemRepository,
};
use campusfind_catalog::domain::types::{
    ClaimantDetails, ClaimedItem, Feedback, FoundItem, ImageUpload, ItemFilter, ItemKind, LostItem,
};
use campusfind_catalog::error::CatalogServiceError;
use campusfind_domain::pagination::PageRequest;

// ── MockFoundRepo ────────────────────────────────────────────────────────────

/// In-memory found pool plus claimed set. `claim` performs the guarded
/// delete-and-insert under one lock, mirroring the transactional repository.
#[derive(Clone)]
pub struct MockFoundRepo {
    pub items: Arc<Mutex<Vec<FoundItem>>>,
    pub claimed: Arc<Mutex<Vec<ClaimedItem>>>,
}

impl MockFoundRepo {
    pub fn new(items: Vec<FoundItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            claimed: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn items_handle(&self) -> Arc<Mutex<Vec<FoundItem>>> {
        Arc::clone(&self.items)
    }

    pub fn claimed_handle(&self) -> Arc<Mutex<Vec<ClaimedItem>>> {
        Arc::clone(&self.claimed)
    }
}

impl FoundItemRepository for MockFoundRepo {
    async fn create(&self, item: &FoundItem) -> Result<(), CatalogServiceError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoundItem>, CatalogServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list(
        &self,
        filter: &ItemFilter,
        _page: PageRequest,
    ) -> Result<Vec<FoundItem>, CatalogServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| &i.category == c)
            })
            .cloned()
            .collect())
    }

    async fn claim(
        &self,
        item_id: Uuid,
        claimant: ClaimantDetails,
    ) -> Result<Option<ClaimedItem>, CatalogServiceError> {
        let mut items = self.items.lock().unwrap();
        let Some(pos) = items.iter().position(|i| i.id == item_id) else {
            return Ok(None);
        };
        let item = items.remove(pos);
        let claimed = ClaimedItem::from_claim(item, claimant);
        self.claimed.lock().unwrap().push(claimed.clone());
        Ok(Some(claimed))
    }
}

// ── MockLostRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockLostRepo {
    pub items: Arc<Mutex<Vec<LostItem>>>,
}

impl MockLostRepo {
    pub fn new(items: Vec<LostItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn items_handle(&self) -> Arc<Mutex<Vec<LostItem>>> {
        Arc::clone(&self.items)
    }
}

impl LostItemRepository for MockLostRepo {
    async fn create(&self, item: &LostItem) -> Result<(), CatalogServiceError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LostItem>, CatalogServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list(
        &self,
        filter: &ItemFilter,
        _page: PageRequest,
    ) -> Result<Vec<LostItem>, CatalogServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| &i.category == c)
            })
            .cloned()
            .collect())
    }
}

// ── MockClaimedRepo ──────────────────────────────────────────────────────────

pub struct MockClaimedRepo {
    pub items: Vec<ClaimedItem>,
}

impl ClaimedItemRepository for MockClaimedRepo {
    async fn list(&self, _page: PageRequest) -> Result<Vec<ClaimedItem>, CatalogServiceError> {
        Ok(self.items.clone())
    }
}

// ── MockFeedbackRepo ─────────────────────────────────────────────────────────

pub struct MockFeedbackRepo {
    pub entries: Arc<Mutex<Vec<Feedback>>>,
}

impl MockFeedbackRepo {
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn entries_handle(&self) -> Arc<Mutex<Vec<Feedback>>> {
        Arc::clone(&self.entries)
    }
}

impl FeedbackRepository for MockFeedbackRepo {
    async fn create(&self, feedback: &Feedback) -> Result<(), CatalogServiceError> {
        self.entries.lock().unwrap().push(feedback.clone());
        Ok(())
    }
}

// ── MockImageStore ───────────────────────────────────────────────────────────

/// Records every stored file without touching the filesystem.
pub struct MockImageStore {
    counter: AtomicUsize,
    pub stored: Arc<Mutex<Vec<String>>>,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
            stored: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn stored_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.stored)
    }
}

impl ImageStore for MockImageStore {
    async fn store(
        &self,
        kind: ItemKind,
        ext: &str,
        _bytes: &[u8],
    ) -> Result<String, CatalogServiceError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let name = format!("{}-{n}.{ext}", kind.dir());
        self.stored.lock().unwrap().push(name.clone());
        Ok(name)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_found_item() -> FoundItem {
    FoundItem {
        id: Uuid::now_v7(),
        item_name: "Black Wallet".to_owned(),
        description: "Leather wallet with a red stripe".to_owned(),
        category: "Accessories".to_owned(),
        subcategory: Some("Wallets".to_owned()),
        place: "Library".to_owned(),
        date_found: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        owner_name: None,
        details: None,
        identifiable: true,
        images: vec!["found-a.jpg".to_owned(), "found-b.png".to_owned()],
        created_at: Utc::now(),
    }
}

pub fn test_lost_item() -> LostItem {
    LostItem {
        id: Uuid::now_v7(),
        item_name: "Scientific Calculator".to_owned(),
        description: "Casio fx-991, name scratched on the back".to_owned(),
        category: "Electronics".to_owned(),
        subcategory: None,
        place: "Block C".to_owned(),
        date_lost: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
        reporter_name: "Ravi Kumar".to_owned(),
        phone: "9812345670".to_owned(),
        sap_id: "500094567".to_owned(),
        images: vec!["lost-a.jpg".to_owned()],
        created_at: Utc::now(),
    }
}

pub fn valid_claimant() -> ClaimantDetails {
    ClaimantDetails {
        details: "Has my student card inside the flap".to_owned(),
        name: "Asha Verma".to_owned(),
        email: "asha@gla.ac.in".to_owned(),
        sap_id: "500091234".to_owned(),
        branch: Some("CSE".to_owned()),
        year: Some("3".to_owned()),
        contact_number: "9876543210".to_owned(),
    }
}

pub fn jpeg_upload(len: usize) -> ImageUpload {
    ImageUpload {
        file_name: "photo.jpg".to_owned(),
        bytes: vec![0xAB; len],
    }
}
