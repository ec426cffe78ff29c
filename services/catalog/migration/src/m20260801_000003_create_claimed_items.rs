use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClaimedItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClaimedItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClaimedItems::FoundItemId).uuid().not_null())
                    .col(ColumnDef::new(ClaimedItems::ItemName).string().not_null())
                    .col(
                        ColumnDef::new(ClaimedItems::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClaimedItems::Category).string().not_null())
                    .col(ColumnDef::new(ClaimedItems::Subcategory).string())
                    .col(ColumnDef::new(ClaimedItems::Place).string().not_null())
                    .col(ColumnDef::new(ClaimedItems::DateFound).date().not_null())
                    .col(ColumnDef::new(ClaimedItems::OwnerName).string())
                    .col(ColumnDef::new(ClaimedItems::Details).text())
                    .col(
                        ColumnDef::new(ClaimedItems::Identifiable)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClaimedItems::Images)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClaimedItems::ClaimDetails)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClaimedItems::ClaimantName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClaimedItems::ClaimantEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClaimedItems::SapId).string().not_null())
                    .col(ColumnDef::new(ClaimedItems::Branch).string())
                    .col(ColumnDef::new(ClaimedItems::Year).string())
                    .col(
                        ColumnDef::new(ClaimedItems::ContactNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClaimedItems::ClaimedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ClaimedItems::Table)
                    .col(ClaimedItems::FoundItemId)
                    .name("idx_claimed_items_found_item_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClaimedItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ClaimedItems {
    Table,
    Id,
    FoundItemId,
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
    ClaimDetails,
    ClaimantName,
    ClaimantEmail,
    SapId,
    Branch,
    Year,
    ContactNumber,
    ClaimedAt,
}
