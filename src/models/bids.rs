use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bid status stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// SeaORM entity for the `bids` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bids")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub gig_id: Uuid,
    pub bidder_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub days: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gigs::Entity",
        from = "Column::GigId",
        to = "super::gigs::Column::Id"
    )]
    Gig,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BidderId",
        to = "super::users::Column::Id"
    )]
    Bidder,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gig.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bidder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/bids. The bidder id comes from the token.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBid {
    pub gig_id: Uuid,
    pub amount: f64,
    pub days: i32,
    pub message: String,
}

/// Condensed gig info attached to decorated bid listings.
#[derive(Debug, Clone, Serialize)]
pub struct BidGigInfo {
    pub title: String,
    pub cover: Option<String>,
    pub user_id: Option<Uuid>,
    pub status: Option<super::gigs::GigStatus>,
}

/// Bidder profile attached to the owner dashboard listings.
#[derive(Debug, Clone, Serialize)]
pub struct BidderProfile {
    pub username: String,
    pub img: Option<String>,
    pub country: Option<String>,
    pub nationality: Option<String>,
    pub education: super::users::EducationList,
    pub certifications: super::users::CertificationList,
    pub experience: super::users::StringList,
    pub bio: Option<String>,
    pub full_name: Option<String>,
}

/// A bid decorated with gig and bidder context for dashboard views.
#[derive(Debug, Clone, Serialize)]
pub struct DecoratedBid {
    pub id: Uuid,
    pub gig_id: Uuid,
    pub bidder_id: Uuid,
    pub bidder_username: Option<String>,
    pub bidder_profile: Option<BidderProfile>,
    pub amount: f64,
    pub days: i32,
    pub message: String,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
    pub gig: Option<BidGigInfo>,
    pub seller_id: Option<Uuid>,
    pub seller_username: Option<String>,
}
