use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::bids as bid_db;
use crate::db::gigs as gig_db;
use crate::db::user_reviews as review_db;
use crate::models::user_reviews::CreateUserReview;

/// POST /api/user-reviews — a gig owner rates the bidder behind one bid.
///
/// One review per bid, enforced by lookup-before-insert (the unique index on
/// bid_id backstops a racing duplicate). The bid may be in any status; the
/// client submits review-then-complete as two sequential calls and the
/// server does not enforce that ordering.
pub async fn create_user_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateUserReview>,
) -> impl Responder {
    let input = body.into_inner();

    if input.stars < 1 || input.stars > 5 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Stars must be between 1 and 5",
        }));
    }
    if input.comment.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Comment is required",
        }));
    }

    let bid = match bid_db::get_bid_by_id(db.get_ref(), input.bid_id).await {
        Ok(Some(bid)) => bid,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Bid {} not found", input.bid_id),
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
            "error": "Only the gig owner can review a bidder",
        }));
    }

    match review_db::review_exists_for_bid(db.get_ref(), input.bid_id).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "Review already submitted for this bid",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
        _ => {}
    }

    let rated_user_id = bid.bidder_id;
    match review_db::insert_review(db.get_ref(), input, rated_user_id, user.0.id, gig.id).await {
        Ok(review) => HttpResponse::Created().json(review),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create review: {e}"),
        })),
    }
}

/// GET /api/user-reviews/{user_id} — reviews about a user (public).
pub async fn list_reviews_for_user(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();
    match review_db::get_reviews_for_user(db.get_ref(), user_id).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
