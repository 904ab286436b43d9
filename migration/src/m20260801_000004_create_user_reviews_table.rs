use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `user_reviews` table and its columns.
#[derive(DeriveIden)]
enum UserReviews {
    Table,
    Id,
    BidId,
    GigId,
    RatedUserId,
    ReviewerId,
    Stars,
    Satisfaction,
    Comment,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Bids {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
}

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
                    .table(UserReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserReviews::BidId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserReviews::GigId).uuid().not_null())
                    .col(ColumnDef::new(UserReviews::RatedUserId).uuid().not_null())
                    .col(ColumnDef::new(UserReviews::ReviewerId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserReviews::Stars)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserReviews::Satisfaction).string().not_null())
                    .col(ColumnDef::new(UserReviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(UserReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_reviews_bid_id")
                            .from(UserReviews::Table, UserReviews::BidId)
                            .to(Bids::Table, Bids::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_reviews_gig_id")
                            .from(UserReviews::Table, UserReviews::GigId)
                            .to(Gigs::Table, Gigs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_reviews_rated_user_id")
                            .from(UserReviews::Table, UserReviews::RatedUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_reviews_reviewer_id")
                            .from(UserReviews::Table, UserReviews::ReviewerId)
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
            .drop_table(Table::drop().table(UserReviews::Table).to_owned())
            .await
    }
}
