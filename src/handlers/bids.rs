use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::bids as bid_db;
use crate::db::gigs as gig_db;
use crate::db::users as user_db;
use crate::models::bids::{
    BidGigInfo, BidStatus, BidderProfile, CreateBid, DecoratedBid,
};
use crate::workflow;

/// POST /api/bids — a buyer submits a proposal on a gig.
///
/// The bidder id comes from the token. Validation order: gig exists, caller
/// is not the owner, gig still accepts bids, amount/days/proposal in range,
/// no existing pending bid from this caller.
pub async fn create_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateBid>,
) -> impl Responder {
    let bidder_id = user.0.id;
    let input = body.into_inner();

    // 1. Verify the gig exists.
    let gig = match gig_db::get_gig_by_id(db.get_ref(), input.gig_id).await {
        Ok(Some(gig)) => gig,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Gig {} not found", input.gig_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 2. Run the workflow checks (ownership, availability, ranges, proposal).
    if let Err(rejection) =
        workflow::validate_new_bid(&gig, bidder_id, input.amount, input.days, &input.message)
    {
        return HttpResponse::build(rejection.status_code()).json(serde_json::json!({
            "error": rejection.to_string(),
        }));
    }

    // 3. One pending bid per bidder per gig. Lookup and insert are separate
    // statements, so a pair of simultaneous submissions can both pass here.
    match bid_db::has_pending_bid(db.get_ref(), input.gig_id, bidder_id).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "You already have a pending bid on this gig",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
        _ => {}
    }

    // 4. Create the bid. No side effects on the gig at this step.
    match bid_db::insert_bid(db.get_ref(), input, bidder_id).await {
        Ok(bid) => {
            tracing::info!(bid_id = %bid.id, gig_id = %bid.gig_id, "bid created");
            HttpResponse::Created().json(bid)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create bid: {e}"),
        })),
    }
}

/// POST /api/bids/approve/{bid_id} — gig owner approves a bid.
///
/// The bid goes straight to in_progress (no separate "approved" step), which
/// is what permits multiple simultaneous approvals across bidders. The gig
/// follows to in_progress if it is not there already. Re-approving an
/// already-in_progress bid is not an error.
pub async fn approve_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let bid_id = path.into_inner();

    let bid = match bid_db::get_bid_by_id(db.get_ref(), bid_id).await {
        Ok(Some(bid)) => bid,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Bid {bid_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let gig = match gig_db::get_gig_by_id(db.get_ref(), bid.gig_id).await {
        Ok(Some(gig)) => gig,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "The gig for this bid no longer exists",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if gig.user_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the gig owner can approve bids",
        }));
    }

    match bid_db::approve_bid(db.get_ref(), bid, gig).await {
        Ok((bid, gig)) => {
            tracing::info!(bid_id = %bid.id, gig_id = %gig.id, "bid approved");
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Bid approved; gig in progress",
                "bid": bid,
                "gig": gig,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to approve bid: {e}"),
        })),
    }
}

/// POST /api/bids/complete/{bid_id} — gig owner marks the work done.
///
/// Requires both the gig and the bid to be in_progress; both move to
/// completed in one transaction.
pub async fn complete_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let bid_id = path.into_inner();

    let bid = match bid_db::get_bid_by_id(db.get_ref(), bid_id).await {
        Ok(Some(bid)) => bid,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Bid {bid_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let gig = match gig_db::get_gig_by_id(db.get_ref(), bid.gig_id).await {
        Ok(Some(gig)) => gig,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "The gig for this bid no longer exists",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if gig.user_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the gig owner can complete the gig",
        }));
    }

    if let Err(rejection) = workflow::validate_completion(gig.status, bid.status) {
        return HttpResponse::build(rejection.status_code()).json(serde_json::json!({
            "error": rejection.to_string(),
        }));
    }

    match bid_db::complete_bid(db.get_ref(), bid, gig).await {
        Ok((bid, gig)) => {
            tracing::info!(bid_id = %bid.id, gig_id = %gig.id, "gig completed");
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Gig completed",
                "bid": bid,
                "gig": gig,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to complete gig: {e}"),
        })),
    }
}

/// GET /api/bids/gig/{id} — all bids on a gig. Owner only.
pub async fn list_bids_for_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let gig_id = path.into_inner();

    if let Err(resp) =
        crate::auth::authorization::verify_gig_owner(db.get_ref(), gig_id, user.0.id).await
    {
        return resp;
    }

    match bid_db::get_bids_by_gig_id(db.get_ref(), gig_id).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/bids/gig/{id}/count — public bid count.
pub async fn count_bids_for_gig(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let gig_id = path.into_inner();
    match bid_db::count_bids_for_gig(db.get_ref(), gig_id).await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "count": count })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/bids/my/gig/{id} — the caller's own bids on one gig.
pub async fn my_bids_for_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let gig_id = path.into_inner();
    match bid_db::get_bids_by_gig_and_bidder(db.get_ref(), gig_id, user.0.id).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/bids/owner/pending — open bids (pending/approved/in_progress)
/// across the caller's gigs, decorated with gig info and bidder profiles.
pub async fn owner_pending_bids(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    owner_dashboard(
        user,
        db,
        vec![BidStatus::Pending, BidStatus::Approved, BidStatus::InProgress],
    )
    .await
}

/// GET /api/bids/owner/completed — completed bids across the caller's gigs.
pub async fn owner_completed_bids(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    owner_dashboard(user, db, vec![BidStatus::Completed]).await
}

async fn owner_dashboard(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    statuses: Vec<BidStatus>,
) -> HttpResponse {
    let own_gigs = match gig_db::get_gigs_by_user_id(db.get_ref(), user.0.id).await {
        Ok(gigs) => gigs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    if own_gigs.is_empty() {
        return HttpResponse::Ok().json(Vec::<DecoratedBid>::new());
    }

    let gig_info: HashMap<Uuid, (String, Option<String>)> = own_gigs
        .iter()
        .map(|g| (g.id, (g.title.clone(), g.cover.clone())))
        .collect();
    let gig_ids: Vec<Uuid> = own_gigs.iter().map(|g| g.id).collect();

    let bids =
        match bid_db::get_bids_for_gigs_with_statuses(db.get_ref(), gig_ids, statuses).await {
            Ok(bids) => bids,
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Database error: {e}"),
                }));
            }
        };

    let mut bidder_ids: Vec<Uuid> = bids.iter().map(|b| b.bidder_id).collect();
    bidder_ids.sort_unstable();
    bidder_ids.dedup();

    let bidders = match user_db::get_users_by_ids(db.get_ref(), bidder_ids).await {
        Ok(users) => users,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    let bidder_map: HashMap<Uuid, BidderProfile> = bidders
        .into_iter()
        .map(|u| {
            (
                u.id,
                BidderProfile {
                    username: u.username,
                    img: u.img,
                    country: Some(u.country),
                    nationality: u.nationality,
                    education: u.education,
                    certifications: u.certifications,
                    experience: u.experience,
                    bio: u.bio,
                    full_name: u.full_name,
                },
            )
        })
        .collect();

    let result: Vec<DecoratedBid> = bids
        .into_iter()
        .map(|b| {
            let profile = bidder_map.get(&b.bidder_id).cloned();
            DecoratedBid {
                id: b.id,
                gig_id: b.gig_id,
                bidder_id: b.bidder_id,
                bidder_username: profile.as_ref().map(|p| p.username.clone()),
                bidder_profile: profile,
                amount: b.amount,
                days: b.days,
                message: b.message,
                status: b.status,
                created_at: b.created_at,
                gig: gig_info.get(&b.gig_id).map(|(title, cover)| BidGigInfo {
                    title: title.clone(),
                    cover: cover.clone(),
                    user_id: None,
                    status: None,
                }),
                seller_id: None,
                seller_username: None,
            }
        })
        .collect();

    HttpResponse::Ok().json(result)
}

/// GET /api/bids/me — the caller's bids across all gigs, decorated with gig
/// and seller info.
pub async fn my_bids(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let bids = match bid_db::get_bids_by_bidder(db.get_ref(), user.0.id).await {
        Ok(bids) => bids,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let mut gig_ids: Vec<Uuid> = bids.iter().map(|b| b.gig_id).collect();
    gig_ids.sort_unstable();
    gig_ids.dedup();

    let gigs = match gig_db::get_gigs_by_ids(db.get_ref(), gig_ids).await {
        Ok(gigs) => gigs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let mut owner_ids: Vec<Uuid> = gigs.iter().map(|g| g.user_id).collect();
    owner_ids.sort_unstable();
    owner_ids.dedup();

    let owners = match user_db::get_users_by_ids(db.get_ref(), owner_ids).await {
        Ok(users) => users,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    let owner_map: HashMap<Uuid, String> =
        owners.into_iter().map(|u| (u.id, u.username)).collect();
    let gig_map: HashMap<Uuid, &crate::models::gigs::Model> =
        gigs.iter().map(|g| (g.id, g)).collect();

    let result: Vec<DecoratedBid> = bids
        .into_iter()
        .map(|b| {
            let gig = gig_map.get(&b.gig_id);
            DecoratedBid {
                id: b.id,
                gig_id: b.gig_id,
                bidder_id: b.bidder_id,
                bidder_username: None,
                bidder_profile: None,
                amount: b.amount,
                days: b.days,
                message: b.message,
                status: b.status,
                created_at: b.created_at,
                gig: gig.map(|g| BidGigInfo {
                    title: g.title.clone(),
                    cover: g.cover.clone(),
                    user_id: Some(g.user_id),
                    status: Some(g.status),
                }),
                seller_id: gig.map(|g| g.user_id),
                seller_username: gig.and_then(|g| owner_map.get(&g.user_id).cloned()),
            }
        })
        .collect();

    HttpResponse::Ok().json(result)
}
