use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Categorical satisfaction level, distinct from the numeric star count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Satisfaction {
    #[sea_orm(string_value = "poor")]
    Poor,
    #[sea_orm(string_value = "fair")]
    Fair,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "very_good")]
    VeryGood,
    #[sea_orm(string_value = "excellent")]
    Excellent,
}

/// SeaORM entity for the `user_reviews` table.
///
/// A rating left by a gig owner about a bidder, tied 1:1 to a bid.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub rated_user_id: Uuid,
    pub reviewer_id: Uuid,
    pub gig_id: Uuid,
    #[sea_orm(unique)]
    pub bid_id: Uuid,
    pub stars: i16,
    pub satisfaction: Satisfaction,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bids::Entity",
        from = "Column::BidId",
        to = "super::bids::Column::Id"
    )]
    Bid,
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/user-reviews.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserReview {
    pub bid_id: Uuid,
    pub stars: i16,
    pub satisfaction: Satisfaction,
    pub comment: String,
}
