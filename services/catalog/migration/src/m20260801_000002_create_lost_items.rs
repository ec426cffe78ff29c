use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LostItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LostItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LostItems::ItemName).string().not_null())
                    .col(ColumnDef::new(LostItems::Description).text().not_null())
                    .col(ColumnDef::new(LostItems::Category).string().not_null())
                    .col(ColumnDef::new(LostItems::Subcategory).string())
                    .col(ColumnDef::new(LostItems::Place).string().not_null())
                    .col(ColumnDef::new(LostItems::DateLost).date().not_null())
                    .col(ColumnDef::new(LostItems::ReporterName).string().not_null())
                    .col(ColumnDef::new(LostItems::Phone).string().not_null())
                    .col(ColumnDef::new(LostItems::SapId).string().not_null())
                    .col(ColumnDef::new(LostItems::Images).json_binary().not_null())
                    .col(
                        ColumnDef::new(LostItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(LostItems::Table)
                    .col(LostItems::CreatedAt)
                    .name("idx_lost_items_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LostItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LostItems {
    Table,
    Id,
    ItemName,
    Description,
    Category,
    Subcategory,
    Place,
    DateLost,
    ReporterName,
    Phone,
    SapId,
    Images,
    CreatedAt,
}
