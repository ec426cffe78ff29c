use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use campusfind_catalog_schema::{claimed_items, feedbacks, found_items, lost_items};
use campusfind_domain::pagination::PageRequest;

use crate::domain::repository::{
    ClaimedItemRepository, FeedbackRepository, FoundItemRepository, LostItemRepository,
};
use crate::domain::types::{ClaimantDetails, ClaimedItem, Feedback, FoundItem, ItemFilter, LostItem};
use crate::error::CatalogServiceError;

/// Stored file names live in a json column; a malformed value reads as an
/// empty list rather than failing the whole row.
fn images_from_json(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

fn images_to_json(images: &[String]) -> serde_json::Value {
    serde_json::json!(images)
}

// ── Found item repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFoundItemRepository {
    pub db: DatabaseConnection,
}

impl FoundItemRepository for DbFoundItemRepository {
    async fn create(&self, item: &FoundItem) -> Result<(), CatalogServiceError> {
        found_item_active_model(item)
            .insert(&self.db)
            .await
            .context("create found item")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoundItem>, CatalogServiceError> {
        let model = found_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find found item by id")?;
        Ok(model.map(found_item_from_model))
    }

    async fn list(
        &self,
        filter: &ItemFilter,
        page: PageRequest,
    ) -> Result<Vec<FoundItem>, CatalogServiceError> {
        let mut query = found_items::Entity::find();
        if let Some(category) = &filter.category {
            query = query.filter(found_items::Column::Category.eq(category));
        }
        if let Some(subcategory) = &filter.subcategory {
            query = query.filter(found_items::Column::Subcategory.eq(subcategory));
        }
        let models = query
            .order_by_desc(found_items::Column::CreatedAt)
            .offset(page.page_index() * u64::from(page.per_page))
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list found items")?;
        Ok(models.into_iter().map(found_item_from_model).collect())
    }

    async fn claim(
        &self,
        item_id: Uuid,
        claimant: ClaimantDetails,
    ) -> Result<Option<ClaimedItem>, CatalogServiceError> {
        let claimed = self
            .db
            .transaction::<_, Option<ClaimedItem>, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let Some(model) = found_items::Entity::find_by_id(item_id).one(txn).await?
                    else {
                        return Ok(None);
                    };

                    // The delete is the claim's commit point. rows_affected == 0
                    // means a concurrent claim consumed the row after our fetch;
                    // that request already owns the transition.
                    let result = found_items::Entity::delete_many()
                        .filter(found_items::Column::Id.eq(item_id))
                        .exec(txn)
                        .await?;
                    if result.rows_affected != 1 {
                        return Ok(None);
                    }

                    let claimed = ClaimedItem::from_claim(found_item_from_model(model), claimant);
                    claimed_item_active_model(&claimed).insert(txn).await?;
                    Ok(Some(claimed))
                })
            })
            .await
            .context("claim found item")?;
        Ok(claimed)
    }
}

fn found_item_active_model(item: &FoundItem) -> found_items::ActiveModel {
    found_items::ActiveModel {
        id: Set(item.id),
        item_name: Set(item.item_name.clone()),
        description: Set(item.description.clone()),
        category: Set(item.category.clone()),
        subcategory: Set(item.subcategory.clone()),
        place: Set(item.place.clone()),
        date_found: Set(item.date_found),
        owner_name: Set(item.owner_name.clone()),
        details: Set(item.details.clone()),
        identifiable: Set(item.identifiable),
        images: Set(images_to_json(&item.images)),
        created_at: Set(item.created_at),
    }
}

fn found_item_from_model(model: found_items::Model) -> FoundItem {
    FoundItem {
        id: model.id,
        item_name: model.item_name,
        description: model.description,
        category: model.category,
        subcategory: model.subcategory,
        place: model.place,
        date_found: model.date_found,
        owner_name: model.owner_name,
        details: model.details,
        identifiable: model.identifiable,
        images: images_from_json(model.images),
        created_at: model.created_at,
    }
}

// ── Lost item repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLostItemRepository {
    pub db: DatabaseConnection,
}

impl LostItemRepository for DbLostItemRepository {
    async fn create(&self, item: &LostItem) -> Result<(), CatalogServiceError> {
        lost_items::ActiveModel {
            id: Set(item.id),
            item_name: Set(item.item_name.clone()),
            description: Set(item.description.clone()),
            category: Set(item.category.clone()),
            subcategory: Set(item.subcategory.clone()),
            place: Set(item.place.clone()),
            date_lost: Set(item.date_lost),
            reporter_name: Set(item.reporter_name.clone()),
            phone: Set(item.phone.clone()),
            sap_id: Set(item.sap_id.clone()),
            images: Set(images_to_json(&item.images)),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("create lost item")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LostItem>, CatalogServiceError> {
        let model = lost_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find lost item by id")?;
        Ok(model.map(lost_item_from_model))
    }

    async fn list(
        &self,
        filter: &ItemFilter,
        page: PageRequest,
    ) -> Result<Vec<LostItem>, CatalogServiceError> {
        let mut query = lost_items::Entity::find();
        if let Some(category) = &filter.category {
            query = query.filter(lost_items::Column::Category.eq(category));
        }
        if let Some(subcategory) = &filter.subcategory {
            query = query.filter(lost_items::Column::Subcategory.eq(subcategory));
        }
        let models = query
            .order_by_desc(lost_items::Column::CreatedAt)
            .offset(page.page_index() * u64::from(page.per_page))
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list lost items")?;
        Ok(models.into_iter().map(lost_item_from_model).collect())
    }
}

fn lost_item_from_model(model: lost_items::Model) -> LostItem {
    LostItem {
        id: model.id,
        item_name: model.item_name,
        description: model.description,
        category: model.category,
        subcategory: model.subcategory,
        place: model.place,
        date_lost: model.date_lost,
        reporter_name: model.reporter_name,
        phone: model.phone,
        sap_id: model.sap_id,
        images: images_from_json(model.images),
        created_at: model.created_at,
    }
}

// ── Claimed item repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClaimedItemRepository {
    pub db: DatabaseConnection,
}

impl ClaimedItemRepository for DbClaimedItemRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<ClaimedItem>, CatalogServiceError> {
        let models = claimed_items::Entity::find()
            .order_by_desc(claimed_items::Column::ClaimedAt)
            .offset(page.page_index() * u64::from(page.per_page))
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list claimed items")?;
        Ok(models.into_iter().map(claimed_item_from_model).collect())
    }
}

fn claimed_item_active_model(item: &ClaimedItem) -> claimed_items::ActiveModel {
    claimed_items::ActiveModel {
        id: Set(item.id),
        found_item_id: Set(item.found_item_id),
        item_name: Set(item.item_name.clone()),
        description: Set(item.description.clone()),
        category: Set(item.category.clone()),
        subcategory: Set(item.subcategory.clone()),
        place: Set(item.place.clone()),
        date_found: Set(item.date_found),
        owner_name: Set(item.owner_name.clone()),
        details: Set(item.details.clone()),
        identifiable: Set(item.identifiable),
        images: Set(images_to_json(&item.images)),
        claim_details: Set(item.claim_details.clone()),
        claimant_name: Set(item.claimant_name.clone()),
        claimant_email: Set(item.claimant_email.clone()),
        sap_id: Set(item.sap_id.clone()),
        branch: Set(item.branch.clone()),
        year: Set(item.year.clone()),
        contact_number: Set(item.contact_number.clone()),
        claimed_at: Set(item.claimed_at),
    }
}

fn claimed_item_from_model(model: claimed_items::Model) -> ClaimedItem {
    ClaimedItem {
        id: model.id,
        found_item_id: model.found_item_id,
        item_name: model.item_name,
        description: model.description,
        category: model.category,
        subcategory: model.subcategory,
        place: model.place,
        date_found: model.date_found,
        owner_name: model.owner_name,
        details: model.details,
        identifiable: model.identifiable,
        images: images_from_json(model.images),
        claim_details: model.claim_details,
        claimant_name: model.claimant_name,
        claimant_email: model.claimant_email,
        sap_id: model.sap_id,
        branch: model.branch,
        year: model.year,
        contact_number: model.contact_number,
        claimed_at: model.claimed_at,
    }
}

// ── Feedback repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFeedbackRepository {
    pub db: DatabaseConnection,
}

impl FeedbackRepository for DbFeedbackRepository {
    async fn create(&self, feedback: &Feedback) -> Result<(), CatalogServiceError> {
        feedbacks::ActiveModel {
            id: Set(feedback.id),
            email: Set(feedback.email.clone()),
            feedback: Set(feedback.feedback.clone()),
            rating: Set(feedback.rating),
            created_at: Set(feedback.created_at),
        }
        .insert(&self.db)
        .await
        .context("create feedback")?;
        Ok(())
    }
}
