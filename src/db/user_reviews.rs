use sea_orm::*;
use uuid::Uuid;

use crate::models::user_reviews::{self, CreateUserReview};

/// Insert a review. The caller resolves `rated_user_id` from the bid.
pub async fn insert_review(
    db: &DatabaseConnection,
    input: CreateUserReview,
    rated_user_id: Uuid,
    reviewer_id: Uuid,
    gig_id: Uuid,
) -> Result<user_reviews::Model, DbErr> {
    let new_review = user_reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        rated_user_id: Set(rated_user_id),
        reviewer_id: Set(reviewer_id),
        gig_id: Set(gig_id),
        bid_id: Set(input.bid_id),
        stars: Set(input.stars),
        satisfaction: Set(input.satisfaction),
        comment: Set(input.comment),
        created_at: Set(chrono::Utc::now()),
    };

    new_review.insert(db).await
}

/// True if a review already exists for this bid (one review per bid).
pub async fn review_exists_for_bid(db: &DatabaseConnection, bid_id: Uuid) -> Result<bool, DbErr> {
    let count = user_reviews::Entity::find()
        .filter(user_reviews::Column::BidId.eq(bid_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Fetch all reviews about a user, newest first.
pub async fn get_reviews_for_user(
    db: &DatabaseConnection,
    rated_user_id: Uuid,
) -> Result<Vec<user_reviews::Model>, DbErr> {
    user_reviews::Entity::find()
        .filter(user_reviews::Column::RatedUserId.eq(rated_user_id))
        .order_by_desc(user_reviews::Column::CreatedAt)
        .all(db)
        .await
}
