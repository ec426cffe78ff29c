use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoundItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoundItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoundItems::ItemName).string().not_null())
                    .col(ColumnDef::new(FoundItems::Description).text().not_null())
                    .col(ColumnDef::new(FoundItems::Category).string().not_null())
                    .col(ColumnDef::new(FoundItems::Subcategory).string())
                    .col(ColumnDef::new(FoundItems::Place).string().not_null())
                    .col(ColumnDef::new(FoundItems::DateFound).date().not_null())
                    .col(ColumnDef::new(FoundItems::OwnerName).string())
                    .col(ColumnDef::new(FoundItems::Details).text())
                    .col(
                        ColumnDef::new(FoundItems::Identifiable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(FoundItems::Images).json_binary().not_null())
                    .col(
                        ColumnDef::new(FoundItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings filter by category and sort newest-first.
        manager
            .create_index(
                Index::create()
                    .table(FoundItems::Table)
                    .col(FoundItems::Category)
                    .name("idx_found_items_category")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FoundItems::Table)
                    .col(FoundItems::CreatedAt)
                    .name("idx_found_items_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoundItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FoundItems {
    Table,
    Id,
    ItemName,
    Description,
    Category,
    Subcategory,
    Place,
    DateFound,
    OwnerName,
    Details,
    Identifiable,
    Images,
    CreatedAt,
}
