use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Gigs {
    Table,
    UserId,
    Status,
}

#[derive(DeriveIden)]
enum Bids {
    Table,
    GigId,
    BidderId,
    Status,
}

#[derive(DeriveIden)]
enum UserReviews {
    Table,
    RatedUserId,
}

#[derive(DeriveIden)]
enum Conversations {
    Table,
    SellerId,
    BuyerId,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    ConversationId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on gigs.user_id for fetching gigs by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_user_id")
                    .table(Gigs::Table)
                    .col(Gigs::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on gigs.status for the default listing filter
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_status")
                    .table(Gigs::Table)
                    .col(Gigs::Status)
                    .to_owned(),
            )
            .await?;

        // Index on bids.gig_id for fetching bids by gig
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_gig_id")
                    .table(Bids::Table)
                    .col(Bids::GigId)
                    .to_owned(),
            )
            .await?;

        // Index on bids.bidder_id for fetching bids by bidder
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_bidder_id")
                    .table(Bids::Table)
                    .col(Bids::BidderId)
                    .to_owned(),
            )
            .await?;

        // Index on bids.status for the owner dashboard queries
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_status")
                    .table(Bids::Table)
                    .col(Bids::Status)
                    .to_owned(),
            )
            .await?;

        // Index on user_reviews.rated_user_id for listing reviews per user
        manager
            .create_index(
                Index::create()
                    .name("idx_user_reviews_rated_user_id")
                    .table(UserReviews::Table)
                    .col(UserReviews::RatedUserId)
                    .to_owned(),
            )
            .await?;

        // Index on conversations.seller_id for the inbox query
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_seller_id")
                    .table(Conversations::Table)
                    .col(Conversations::SellerId)
                    .to_owned(),
            )
            .await?;

        // Index on conversations.buyer_id for the inbox query
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_buyer_id")
                    .table(Conversations::Table)
                    .col(Conversations::BuyerId)
                    .to_owned(),
            )
            .await?;

        // Index on messages.conversation_id for fetching a thread
        manager
            .create_index(
                Index::create()
                    .name("idx_messages_conversation_id")
                    .table(Messages::Table)
                    .col(Messages::ConversationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_gigs_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gigs_status").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_gig_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_bidder_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_status").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_reviews_rated_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_conversations_seller_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_conversations_buyer_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_messages_conversation_id").to_owned())
            .await?;

        Ok(())
    }
}
