use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::db::orders as order_db;
use crate::models::gigs::GigStatus;
use crate::models::orders::ConfirmOrder;
use crate::payments::PaymentClient;

/// POST /api/orders/create-payment-intent/{id} — legacy payment path.
///
/// Creates a payment intent for the gig's minimum price, records a pending
/// order, and moves the gig to in_progress. Answers 503 when no payment key
/// is configured.
pub async fn create_payment_intent(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    payments: web::Data<PaymentClient>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if !payments.is_enabled() {
        return HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "Payments are temporarily disabled",
        }));
    }

    let gig_id = path.into_inner();
    let gig = match gig_db::get_gig_by_id(db.get_ref(), gig_id).await {
        Ok(Some(gig)) => gig,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Gig {gig_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if gig.status != GigStatus::Available {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "This gig is not available",
        }));
    }

    let amount_minor_units = (gig.price_min * 100.0).round() as i64;
    let intent = match payments.create_payment_intent(amount_minor_units, "inr").await {
        Ok(intent) => intent,
        Err(e) => {
            tracing::warn!(gig_id = %gig_id, "payment intent creation failed: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e,
            }));
        }
    };

    match order_db::insert_order_for_intent(db.get_ref(), gig, user.0.id, intent.id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "clientSecret": intent.client_secret,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create order: {e}"),
        })),
    }
}

/// GET /api/orders — the caller's orders (as seller if they sell, as buyer
/// otherwise).
pub async fn get_orders(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match order_db::get_orders_for_user(db.get_ref(), user.0.id, user.0.is_seller).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/orders/confirm — mark the order behind a payment intent as
/// completed and complete its gig.
pub async fn confirm_order(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    payments: web::Data<PaymentClient>,
    body: web::Json<ConfirmOrder>,
) -> impl Responder {
    if !payments.is_enabled() {
        return HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "Payments are temporarily disabled",
        }));
    }

    match order_db::confirm_order(db.get_ref(), &body.payment_intent).await {
        Ok(Some(_)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Order has been completed",
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No order matches this payment intent",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to confirm order: {e}"),
        })),
    }
}
