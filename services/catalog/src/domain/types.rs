use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Maximum number of images per submission. More than this rejects the
/// whole submission, it is not silently truncated.
pub const MAX_IMAGES: usize = 6;

/// Maximum size of a single uploaded image.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Extensions accepted for uploaded images, lowercase.
pub const ALLOWED_IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Which pool an item (or its stored images) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Found,
    Lost,
}

impl ItemKind {
    /// Subdirectory under the media root, also the URL prefix stem.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Lost => "lost",
        }
    }
}

/// An item in the active found pool.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundItem {
    pub id: Uuid,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_found: NaiveDate,
    pub owner_name: Option<String>,
    pub details: Option<String>,
    pub identifiable: bool,
    /// Stored file names, in upload order.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// An item someone reported losing. No claim workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct LostItem {
    pub id: Uuid,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_lost: NaiveDate,
    pub reporter_name: String,
    pub phone: String,
    pub sap_id: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Claimant-supplied verification fields for a claim submission.
#[derive(Debug, Clone, Default)]
pub struct ClaimantDetails {
    pub details: String,
    pub name: String,
    pub email: String,
    pub sap_id: String,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub contact_number: String,
}

/// Audit record of a successful claim: the consumed found item's fields
/// merged with the claimant's.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimedItem {
    pub id: Uuid,
    pub found_item_id: Uuid,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_found: NaiveDate,
    pub owner_name: Option<String>,
    pub details: Option<String>,
    pub identifiable: bool,
    pub images: Vec<String>,
    pub claim_details: String,
    pub claimant_name: String,
    pub claimant_email: String,
    pub sap_id: String,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub contact_number: String,
    pub claimed_at: DateTime<Utc>,
}

impl ClaimedItem {
    /// Merge an active found item with claimant details at claim time.
    pub fn from_claim(item: FoundItem, claimant: ClaimantDetails) -> Self {
        Self {
            id: Uuid::now_v7(),
            found_item_id: item.id,
            item_name: item.item_name,
            description: item.description,
            category: item.category,
            subcategory: item.subcategory,
            place: item.place,
            date_found: item.date_found,
            owner_name: item.owner_name,
            details: item.details,
            identifiable: item.identifiable,
            images: item.images,
            claim_details: claimant.details,
            claimant_name: claimant.name,
            claimant_email: claimant.email,
            sap_id: claimant.sap_id,
            branch: claimant.branch,
            year: claimant.year,
            contact_number: claimant.contact_number,
            claimed_at: Utc::now(),
        }
    }
}

/// Write-once user feedback. `rating` is 1..=5, or 0 when unrated.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub email: String,
    pub feedback: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

/// Optional catalog listing filters.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// A decoded multipart image part, pending validation and storage.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name, only used to derive the extension.
    pub file_name: String,
    pub bytes: Vec<u8>,
}
