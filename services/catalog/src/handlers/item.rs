use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::types::{FoundItem, ImageUpload, ItemFilter, ItemKind, LostItem};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::catalog::{
    GetItemDetailsUseCase, ItemDetails, ListFoundItemsUseCase, ListLostItemsUseCase,
};
use crate::usecase::intake::{
    NewFoundItem, NewLostItem, SubmitFoundItemUseCase, SubmitLostItemUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Stored file names are rewritten to the URL paths `ServeDir` answers on,
/// so a re-read always yields the same URL list.
pub fn image_url(kind: ItemKind, name: &str) -> String {
    match kind {
        ItemKind::Found => format!("/foundItemImages/{name}"),
        ItemKind::Lost => format!("/lostItemImages/{name}"),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItemResponse {
    pub id: String,
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
    #[serde(serialize_with = "campusfind_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<FoundItem> for FoundItemResponse {
    fn from(item: FoundItem) -> Self {
        Self {
            id: item.id.to_string(),
            item_name: item.item_name,
            description: item.description,
            category: item.category,
            subcategory: item.subcategory,
            place: item.place,
            date_found: item.date_found,
            owner_name: item.owner_name,
            details: item.details,
            identifiable: item.identifiable,
            images: item
                .images
                .iter()
                .map(|name| image_url(ItemKind::Found, name))
                .collect(),
            created_at: item.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItemResponse {
    pub id: String,
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
    #[serde(serialize_with = "campusfind_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<LostItem> for LostItemResponse {
    fn from(item: LostItem) -> Self {
        Self {
            id: item.id.to_string(),
            item_name: item.item_name,
            description: item.description,
            category: item.category,
            subcategory: item.subcategory,
            place: item.place,
            date_lost: item.date_lost,
            reporter_name: item.reporter_name,
            phone: item.phone,
            sap_id: item.sap_id,
            images: item
                .images
                .iter()
                .map(|name| image_url(ItemKind::Lost, name))
                .collect(),
            created_at: item.created_at,
        }
    }
}

// ── Multipart parsing ────────────────────────────────────────────────────────

/// Text fields plus uploaded images from an intake form. Any part carrying
/// a file name is treated as an image; everything else is a text field.
#[derive(Default)]
struct IntakeForm {
    fields: std::collections::HashMap<String, String>,
    images: Vec<ImageUpload>,
}

impl IntakeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, CatalogServiceError> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| CatalogServiceError::InvalidSubmission("multipart body"))?
        {
            let name = field.name().unwrap_or_default().to_owned();
            if let Some(file_name) = field.file_name() {
                let file_name = file_name.to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| CatalogServiceError::InvalidSubmission("multipart body"))?;
                form.images.push(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|_| CatalogServiceError::InvalidSubmission("multipart body"))?;
                form.fields.insert(name, value);
            }
        }
        Ok(form)
    }

    fn take(&mut self, name: &str) -> String {
        self.fields.remove(name).unwrap_or_default()
    }

    fn take_opt(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|v| !v.trim().is_empty())
    }

    fn take_date(&mut self, name: &str) -> Option<NaiveDate> {
        self.fields
            .remove(name)
            .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
    }

    fn take_bool(&mut self, name: &str) -> bool {
        matches!(
            self.fields.remove(name).as_deref().map(str::trim),
            Some("true" | "on" | "1")
        )
    }
}

// ── POST /api/submitFoundItem ────────────────────────────────────────────────

pub async fn upload_found_item(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), CatalogServiceError> {
    let mut form = IntakeForm::read(multipart).await?;
    let input = NewFoundItem {
        item_name: form.take("itemName"),
        description: form.take("description"),
        category: form.take("category"),
        subcategory: form.take_opt("subcategory"),
        place: form.take("place"),
        date_found: form.take_date("date"),
        owner_name: form.take_opt("ownerName"),
        details: form.take_opt("details"),
        identifiable: form.take_bool("isIdentifiable"),
        images: form.images,
    };

    let usecase = SubmitFoundItemUseCase {
        items: state.found_repo(),
        store: state.image_store.clone(),
    };
    let item = usecase.execute(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": FoundItemResponse::from(item) })),
    ))
}

// ── POST /api/submitLostItem ─────────────────────────────────────────────────

pub async fn upload_lost_item(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), CatalogServiceError> {
    let mut form = IntakeForm::read(multipart).await?;
    let input = NewLostItem {
        item_name: form.take("itemName"),
        description: form.take("description"),
        category: form.take("category"),
        subcategory: form.take_opt("subcategory"),
        place: form.take("place"),
        date_lost: form.take_date("date"),
        reporter_name: form.take("name"),
        phone: form.take("phone"),
        sap_id: form.take("sapId"),
        images: form.images,
    };

    let usecase = SubmitLostItemUseCase {
        items: state.lost_repo(),
        store: state.image_store.clone(),
    };
    let item = usecase.execute(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": LostItemResponse::from(item) })),
    ))
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ItemListQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

fn parse_query(raw: Option<&str>) -> Result<ItemListQuery, CatalogServiceError> {
    raw.map(serde_qs::from_str)
        .transpose()
        .map_err(|_| CatalogServiceError::InvalidSubmission("query string"))
        .map(Option::unwrap_or_default)
}

impl ItemListQuery {
    fn filter(&self) -> ItemFilter {
        ItemFilter {
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
        }
    }

    fn page(&self) -> campusfind_domain::pagination::PageRequest {
        campusfind_domain::pagination::PageRequest {
            per_page: self.per_page.unwrap_or(25),
            page: self.page.unwrap_or(1),
        }
    }
}

// ── GET /getAllItems ─────────────────────────────────────────────────────────

pub async fn get_all_items(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Value>, CatalogServiceError> {
    let query = parse_query(raw_query.as_deref())?;
    let usecase = ListFoundItemsUseCase {
        items: state.found_repo(),
    };
    let items = usecase.execute(query.filter(), query.page()).await?;
    let data: Vec<FoundItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "success": true, "data": data })))
}

// ── GET /getAllLostItems ─────────────────────────────────────────────────────

pub async fn get_all_lost_items(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Value>, CatalogServiceError> {
    let query = parse_query(raw_query.as_deref())?;
    let usecase = ListLostItemsUseCase {
        items: state.lost_repo(),
    };
    let items = usecase.execute(query.filter(), query.page()).await?;
    let data: Vec<LostItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "success": true, "data": data })))
}

// ── GET /api/getItemDetails/{id} ─────────────────────────────────────────────

pub async fn get_item_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, CatalogServiceError> {
    let id: Uuid = id.parse().map_err(|_| CatalogServiceError::ItemNotFound)?;
    let usecase = GetItemDetailsUseCase {
        found: state.found_repo(),
        lost: state.lost_repo(),
    };
    let item = match usecase.execute(id).await? {
        ItemDetails::Found(item) => {
            let mut value = serde_json::to_value(FoundItemResponse::from(item))
                .map_err(|e| CatalogServiceError::Internal(e.into()))?;
            value["type"] = json!("found");
            value
        }
        ItemDetails::Lost(item) => {
            let mut value = serde_json::to_value(LostItemResponse::from(item))
                .map_err(|e| CatalogServiceError::Internal(e.into()))?;
            value["type"] = json!("lost");
            value
        }
    };
    Ok(Json(json!({ "success": true, "item": item })))
}
