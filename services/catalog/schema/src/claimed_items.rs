use sea_orm::entity::prelude::*;

/// Audit record of a successful claim. Carries a full copy of the consumed
/// found item plus the claimant-supplied verification fields. Never updated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "claimed_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Id the item had while it sat in `found_items`.
    pub found_item_id: Uuid,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_found: chrono::NaiveDate,
    pub owner_name: Option<String>,
    pub details: Option<String>,
    pub identifiable: bool,
    pub images: Json,
    pub claim_details: String,
    pub claimant_name: String,
    pub claimant_email: String,
    pub sap_id: String,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub contact_number: String,
    pub claimed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
