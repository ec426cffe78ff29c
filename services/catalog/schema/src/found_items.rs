use sea_orm::entity::prelude::*;

/// An item someone turned in, still in the active pool.
/// Deleted (not flagged) when a claim succeeds; the claimed copy lives in
/// `claimed_items`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "found_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_found: chrono::NaiveDate,
    pub owner_name: Option<String>,
    pub details: Option<String>,
    pub identifiable: bool,
    /// Stored file names, in upload order. At most 6.
    pub images: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
