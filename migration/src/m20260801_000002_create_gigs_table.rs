use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `gigs` table and its columns.
#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Category,
    PriceMin,
    PriceMax,
    DeliveryTime,
    Pages,
    PricePerPage,
    DiscountEnabled,
    DiscountAmount,
    DiscountCondition,
    Cover,
    Images,
    DocumentData,
    DocumentContentType,
    DocumentFilename,
    DocumentSize,
    HasDocument,
    Status,
    LikedBy,
    TotalStars,
    StarNumber,
    Sales,
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
                    .table(Gigs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gigs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Gigs::UserId).uuid().not_null())
                    .col(ColumnDef::new(Gigs::Title).string().not_null())
                    .col(ColumnDef::new(Gigs::Description).text().not_null())
                    .col(ColumnDef::new(Gigs::Category).string().not_null())
                    .col(ColumnDef::new(Gigs::PriceMin).double().not_null())
                    .col(ColumnDef::new(Gigs::PriceMax).double().not_null())
                    .col(ColumnDef::new(Gigs::DeliveryTime).integer().not_null())
                    .col(ColumnDef::new(Gigs::Pages).integer().not_null())
                    .col(ColumnDef::new(Gigs::PricePerPage).double().not_null())
                    .col(ColumnDef::new(Gigs::DiscountEnabled).boolean().not_null())
                    .col(ColumnDef::new(Gigs::DiscountAmount).double().not_null())
                    .col(ColumnDef::new(Gigs::DiscountCondition).string().not_null())
                    .col(ColumnDef::new(Gigs::Cover).string())
                    .col(ColumnDef::new(Gigs::Images).json_binary().not_null())
                    .col(ColumnDef::new(Gigs::DocumentData).blob())
                    .col(ColumnDef::new(Gigs::DocumentContentType).string())
                    .col(ColumnDef::new(Gigs::DocumentFilename).string())
                    .col(ColumnDef::new(Gigs::DocumentSize).big_integer())
                    .col(ColumnDef::new(Gigs::HasDocument).boolean().not_null())
                    .col(ColumnDef::new(Gigs::Status).string().not_null())
                    .col(ColumnDef::new(Gigs::LikedBy).json_binary().not_null())
                    .col(ColumnDef::new(Gigs::TotalStars).integer().not_null())
                    .col(ColumnDef::new(Gigs::StarNumber).integer().not_null())
                    .col(ColumnDef::new(Gigs::Sales).integer().not_null())
                    .col(
                        ColumnDef::new(Gigs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Gigs::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gigs_user_id")
                            .from(Gigs::Table, Gigs::UserId)
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
            .drop_table(Table::drop().table(Gigs::Table).to_owned())
            .await
    }
}
