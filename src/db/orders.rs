use sea_orm::*;
use uuid::Uuid;

use crate::models::gigs::{self, GigStatus};
use crate::models::orders::{self, OrderStatus};

/// Create a pending order for a freshly created payment intent and move the
/// gig to in_progress, atomically.
pub async fn insert_order_for_intent(
    db: &DatabaseConnection,
    gig: gigs::Model,
    buyer_id: Uuid,
    payment_intent: String,
) -> Result<orders::Model, DbErr> {
    let txn = db.begin().await?;

    let new_order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig.id),
        title: Set(gig.title.clone()),
        img: Set(gig.cover.clone()),
        buyer_id: Set(buyer_id),
        seller_id: Set(gig.user_id),
        price: Set(gig.price_min),
        payment_intent: Set(payment_intent),
        status: Set(OrderStatus::Pending),
        created_at: Set(chrono::Utc::now()),
    };
    let order = new_order.insert(&txn).await?;

    let mut active_gig: gigs::ActiveModel = gig.into();
    active_gig.status = Set(GigStatus::InProgress);
    active_gig.updated_at = Set(Some(chrono::Utc::now()));
    active_gig.update(&txn).await?;

    txn.commit().await?;
    Ok(order)
}

/// Mark the order matching a payment intent as completed and complete its
/// gig in the same transaction. Returns None when no order matches.
pub async fn confirm_order(
    db: &DatabaseConnection,
    payment_intent: &str,
) -> Result<Option<orders::Model>, DbErr> {
    let txn = db.begin().await?;

    let Some(order) = orders::Entity::find()
        .filter(orders::Column::PaymentIntent.eq(payment_intent))
        .one(&txn)
        .await?
    else {
        txn.rollback().await?;
        return Ok(None);
    };

    let gig_id = order.gig_id;
    let mut active_order: orders::ActiveModel = order.into();
    active_order.status = Set(OrderStatus::Completed);
    let updated = active_order.update(&txn).await?;

    if let Some(gig) = gigs::Entity::find_by_id(gig_id).one(&txn).await? {
        let mut active_gig: gigs::ActiveModel = gig.into();
        active_gig.status = Set(GigStatus::Completed);
        active_gig.updated_at = Set(Some(chrono::Utc::now()));
        active_gig.update(&txn).await?;
    }

    txn.commit().await?;
    Ok(Some(updated))
}

/// Fetch a user's orders: as seller when they sell, as buyer otherwise.
pub async fn get_orders_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    is_seller: bool,
) -> Result<Vec<orders::Model>, DbErr> {
    let column = if is_seller {
        orders::Column::SellerId
    } else {
        orders::Column::BuyerId
    };
    orders::Entity::find()
        .filter(column.eq(user_id))
        .order_by_desc(orders::Column::CreatedAt)
        .all(db)
        .await
}
