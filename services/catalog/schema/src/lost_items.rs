use sea_orm::entity::prelude::*;

/// An item someone is searching for. Read-only after intake; there is no
/// claim workflow for lost items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lost_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub place: String,
    pub date_lost: chrono::NaiveDate,
    pub reporter_name: String,
    pub phone: String,
    pub sap_id: String,
    pub images: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
