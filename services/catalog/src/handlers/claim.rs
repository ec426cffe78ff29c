use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::types::{ClaimantDetails, ClaimedItem, ItemKind};
use crate::error::CatalogServiceError;
use crate::handlers::item::image_url;
use crate::state::AppState;
use crate::usecase::catalog::ListClaimedItemsUseCase;
use crate::usecase::claim::SubmitClaimUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedItemResponse {
    pub id: String,
    pub found_item_id: String,
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
    #[serde(serialize_with = "campusfind_core::serde::to_rfc3339_ms")]
    pub claimed_at: chrono::DateTime<chrono::Utc>,
}

impl From<ClaimedItem> for ClaimedItemResponse {
    fn from(item: ClaimedItem) -> Self {
        Self {
            id: item.id.to_string(),
            found_item_id: item.found_item_id.to_string(),
            item_name: item.item_name,
            description: item.description,
            category: item.category,
            subcategory: item.subcategory,
            place: item.place,
            date_found: item.date_found,
            owner_name: item.owner_name,
            details: item.details,
            identifiable: item.identifiable,
            // Claimed items keep pointing at the found-image directory; the
            // files are not moved when the claim lands.
            images: item
                .images
                .iter()
                .map(|name| image_url(ItemKind::Found, name))
                .collect(),
            claim_details: item.claim_details,
            claimant_name: item.claimant_name,
            claimant_email: item.claimant_email,
            sap_id: item.sap_id,
            branch: item.branch,
            year: item.year,
            contact_number: item.contact_number,
            claimed_at: item.claimed_at,
        }
    }
}

// ── POST /claimItem/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub sap_id: String,
    pub branch: Option<String>,
    pub year: Option<String>,
    #[serde(default)]
    pub contact_number: String,
}

pub async fn claim_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ClaimRequest>,
) -> Result<(StatusCode, Json<Value>), CatalogServiceError> {
    let id: Uuid = id.parse().map_err(|_| CatalogServiceError::ItemNotFound)?;
    let usecase = SubmitClaimUseCase {
        items: state.found_repo(),
    };
    let claimed = usecase
        .execute(
            id,
            ClaimantDetails {
                details: body.details,
                name: body.name,
                email: body.email,
                sap_id: body.sap_id,
                branch: body.branch.filter(|v| !v.trim().is_empty()),
                year: body.year.filter(|v| !v.trim().is_empty()),
                contact_number: body.contact_number,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": ClaimedItemResponse::from(claimed) })),
    ))
}

// ── GET /claimedItems ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ClaimedListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn get_claimed_items(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Value>, CatalogServiceError> {
    let query: ClaimedListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| CatalogServiceError::InvalidSubmission("query string"))?
        .unwrap_or_default();

    let usecase = ListClaimedItemsUseCase {
        items: state.claimed_repo(),
    };
    let items = usecase
        .execute(campusfind_domain::pagination::PageRequest {
            per_page: query.per_page.unwrap_or(25),
            page: query.page.unwrap_or(1),
        })
        .await?;
    let data: Vec<ClaimedItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(json!({ "success": true, "data": data })))
}
