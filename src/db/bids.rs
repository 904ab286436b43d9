use sea_orm::*;
use uuid::Uuid;

use crate::models::bids::{self, BidStatus, CreateBid};
use crate::models::gigs::{self, GigStatus};

/// Insert a new bid (defaults to Pending status).
pub async fn insert_bid(
    db: &DatabaseConnection,
    input: CreateBid,
    bidder_id: Uuid,
) -> Result<bids::Model, DbErr> {
    let new_bid = bids::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(input.gig_id),
        bidder_id: Set(bidder_id),
        amount: Set(input.amount),
        days: Set(input.days),
        message: Set(input.message),
        status: Set(BidStatus::Pending),
        created_at: Set(chrono::Utc::now()),
    };

    new_bid.insert(db).await
}

/// Fetch a single bid by ID.
pub async fn get_bid_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<bids::Model>, DbErr> {
    bids::Entity::find_by_id(id).one(db).await
}

/// True if the bidder already holds a pending bid on this gig.
///
/// Checked before the insert; the lookup and the insert are two statements,
/// so two simultaneous submissions can both pass (see DESIGN.md).
pub async fn has_pending_bid(
    db: &DatabaseConnection,
    gig_id: Uuid,
    bidder_id: Uuid,
) -> Result<bool, DbErr> {
    let count = bids::Entity::find()
        .filter(bids::Column::GigId.eq(gig_id))
        .filter(bids::Column::BidderId.eq(bidder_id))
        .filter(bids::Column::Status.eq(BidStatus::Pending))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Fetch all bids on a gig, newest first.
pub async fn get_bids_by_gig_id(
    db: &DatabaseConnection,
    gig_id: Uuid,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::GigId.eq(gig_id))
        .order_by_desc(bids::Column::CreatedAt)
        .all(db)
        .await
}

/// Count bids on a gig (public).
pub async fn count_bids_for_gig(db: &DatabaseConnection, gig_id: Uuid) -> Result<u64, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::GigId.eq(gig_id))
        .count(db)
        .await
}

/// Fetch one bidder's bids on one gig, newest first.
pub async fn get_bids_by_gig_and_bidder(
    db: &DatabaseConnection,
    gig_id: Uuid,
    bidder_id: Uuid,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::GigId.eq(gig_id))
        .filter(bids::Column::BidderId.eq(bidder_id))
        .order_by_desc(bids::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch all bids placed by a bidder, newest first.
pub async fn get_bids_by_bidder(
    db: &DatabaseConnection,
    bidder_id: Uuid,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::BidderId.eq(bidder_id))
        .order_by_desc(bids::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch bids across a set of gigs restricted to the given statuses,
/// newest first (owner dashboards).
pub async fn get_bids_for_gigs_with_statuses(
    db: &DatabaseConnection,
    gig_ids: Vec<Uuid>,
    statuses: Vec<BidStatus>,
) -> Result<Vec<bids::Model>, DbErr> {
    if gig_ids.is_empty() {
        return Ok(Vec::new());
    }
    bids::Entity::find()
        .filter(bids::Column::GigId.is_in(gig_ids))
        .filter(bids::Column::Status.is_in(statuses))
        .order_by_desc(bids::Column::CreatedAt)
        .all(db)
        .await
}

/// Approve a bid: the bid goes to in_progress, and the gig follows if it is
/// not there already. Both writes commit in one transaction so a failure on
/// the gig update cannot leave an approved bid on an available gig.
///
/// Approving a bid that is already in_progress is allowed and rewrites the
/// same value (multiple approvals across bidders are a feature, and clients
/// retry).
pub async fn approve_bid(
    db: &DatabaseConnection,
    bid: bids::Model,
    gig: gigs::Model,
) -> Result<(bids::Model, gigs::Model), DbErr> {
    let txn = db.begin().await?;

    let mut active_bid: bids::ActiveModel = bid.into();
    active_bid.status = Set(BidStatus::InProgress);
    let updated_bid = active_bid.update(&txn).await?;

    let updated_gig = if gig.status != GigStatus::InProgress {
        let mut active_gig: gigs::ActiveModel = gig.into();
        active_gig.status = Set(GigStatus::InProgress);
        active_gig.updated_at = Set(Some(chrono::Utc::now()));
        active_gig.update(&txn).await?
    } else {
        gig
    };

    txn.commit().await?;
    Ok((updated_bid, updated_gig))
}

/// Complete a bid and its gig together. The caller has already verified
/// both records are in_progress.
pub async fn complete_bid(
    db: &DatabaseConnection,
    bid: bids::Model,
    gig: gigs::Model,
) -> Result<(bids::Model, gigs::Model), DbErr> {
    let txn = db.begin().await?;

    let mut active_bid: bids::ActiveModel = bid.into();
    active_bid.status = Set(BidStatus::Completed);
    let updated_bid = active_bid.update(&txn).await?;

    let mut active_gig: gigs::ActiveModel = gig.into();
    active_gig.status = Set(GigStatus::Completed);
    active_gig.updated_at = Set(Some(chrono::Utc::now()));
    let updated_gig = active_gig.update(&txn).await?;

    txn.commit().await?;
    Ok((updated_bid, updated_gig))
}
