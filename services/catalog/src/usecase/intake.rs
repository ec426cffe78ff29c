use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::repository::{FoundItemRepository, ImageStore, LostItemRepository};
use crate::domain::types::{
    ALLOWED_IMAGE_EXTS, FoundItem, ImageUpload, ItemKind, LostItem, MAX_IMAGE_BYTES, MAX_IMAGES,
};
use crate::error::CatalogServiceError;

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, CatalogServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogServiceError::InvalidSubmission(field));
    }
    Ok(trimmed)
}

/// Lowercased extension from the client file name, checked against the
/// whitelist. The name itself is never used for storage.
fn image_ext(file_name: &str) -> Result<String, CatalogServiceError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_IMAGE_EXTS.contains(&ext.as_str()) {
        return Err(CatalogServiceError::UnsupportedImageType(ext));
    }
    Ok(ext)
}

/// Validate the image set, then write every file. All-or-nothing: any
/// invalid image fails the submission before a single byte is stored.
async fn store_images<S: ImageStore>(
    store: &S,
    kind: ItemKind,
    images: &[ImageUpload],
) -> Result<Vec<String>, CatalogServiceError> {
    if images.len() > MAX_IMAGES {
        return Err(CatalogServiceError::TooManyImages { limit: MAX_IMAGES });
    }
    let mut exts = Vec::with_capacity(images.len());
    for image in images {
        if image.bytes.len() > MAX_IMAGE_BYTES {
            return Err(CatalogServiceError::ImageTooLarge {
                limit_bytes: MAX_IMAGE_BYTES,
            });
        }
        exts.push(image_ext(&image.file_name)?);
    }

    let mut names = Vec::with_capacity(images.len());
    for (image, ext) in images.iter().zip(exts) {
        names.push(store.store(kind, &ext, &image.bytes).await?);
    }
    Ok(names)
}

// ── Found item intake ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct NewFoundItem {
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_found: Option<NaiveDate>,
    pub owner_name: Option<String>,
    pub details: Option<String>,
    pub identifiable: bool,
    pub images: Vec<ImageUpload>,
}

pub struct SubmitFoundItemUseCase<F, S>
where
    F: FoundItemRepository,
    S: ImageStore,
{
    pub items: F,
    pub store: S,
}

impl<F, S> SubmitFoundItemUseCase<F, S>
where
    F: FoundItemRepository,
    S: ImageStore,
{
    pub async fn execute(&self, input: NewFoundItem) -> Result<FoundItem, CatalogServiceError> {
        let item_name = require(&input.item_name, "itemName")?.to_owned();
        let description = require(&input.description, "description")?.to_owned();
        let category = require(&input.category, "category")?.to_owned();
        let place = require(&input.place, "place")?.to_owned();
        let date_found = input
            .date_found
            .ok_or(CatalogServiceError::InvalidSubmission("date"))?;

        // Files land on disk before the row is written. A failed insert
        // leaves orphan files, never a record without its images.
        let images = store_images(&self.store, ItemKind::Found, &input.images).await?;

        let item = FoundItem {
            id: Uuid::now_v7(),
            item_name,
            description,
            category,
            subcategory: input.subcategory.filter(|s| !s.trim().is_empty()),
            place,
            date_found,
            owner_name: input.owner_name.filter(|s| !s.trim().is_empty()),
            details: input.details.filter(|s| !s.trim().is_empty()),
            identifiable: input.identifiable,
            images,
            created_at: Utc::now(),
        };
        self.items.create(&item).await?;
        Ok(item)
    }
}

// ── Lost item intake ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct NewLostItem {
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_lost: Option<NaiveDate>,
    pub reporter_name: String,
    pub phone: String,
    pub sap_id: String,
    pub images: Vec<ImageUpload>,
}

pub struct SubmitLostItemUseCase<L, S>
where
    L: LostItemRepository,
    S: ImageStore,
{
    pub items: L,
    pub store: S,
}

impl<L, S> SubmitLostItemUseCase<L, S>
where
    L: LostItemRepository,
    S: ImageStore,
{
    pub async fn execute(&self, input: NewLostItem) -> Result<LostItem, CatalogServiceError> {
        let item_name = require(&input.item_name, "itemName")?.to_owned();
        let description = require(&input.description, "description")?.to_owned();
        let category = require(&input.category, "category")?.to_owned();
        let place = require(&input.place, "place")?.to_owned();
        let reporter_name = require(&input.reporter_name, "name")?.to_owned();
        let phone = require(&input.phone, "phone")?.to_owned();
        let sap_id = require(&input.sap_id, "sapId")?.to_owned();
        let date_lost = input
            .date_lost
            .ok_or(CatalogServiceError::InvalidSubmission("date"))?;

        let images = store_images(&self.store, ItemKind::Lost, &input.images).await?;

        let item = LostItem {
            id: Uuid::now_v7(),
            item_name,
            description,
            category,
            subcategory: input.subcategory.filter(|s| !s.trim().is_empty()),
            place,
            date_lost,
            reporter_name,
            phone,
            sap_id,
            images,
            created_at: Utc::now(),
        };
        self.items.create(&item).await?;
        Ok(item)
    }
}
