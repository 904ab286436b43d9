use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `conversations` table and its columns.
#[derive(DeriveIden)]
enum Conversations {
    Table,
    Id,
    SellerId,
    BuyerId,
    ReadBySeller,
    ReadByBuyer,
    LastMessage,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conversations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conversations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conversations::SellerId).uuid().not_null())
                    .col(ColumnDef::new(Conversations::BuyerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Conversations::ReadBySeller)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversations::ReadByBuyer)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conversations::LastMessage).string())
                    .col(
                        ColumnDef::new(Conversations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conversations::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversations_seller_id")
                            .from(Conversations::Table, Conversations::SellerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversations_buyer_id")
                            .from(Conversations::Table, Conversations::BuyerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conversations::Table).to_owned())
            .await
    }
}
