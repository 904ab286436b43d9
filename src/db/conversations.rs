use sea_orm::*;
use uuid::Uuid;

use crate::models::conversations;

/// Find the conversation between a seller and a buyer, if any.
pub async fn find_between(
    db: &DatabaseConnection,
    seller_id: Uuid,
    buyer_id: Uuid,
) -> Result<Option<conversations::Model>, DbErr> {
    conversations::Entity::find()
        .filter(conversations::Column::SellerId.eq(seller_id))
        .filter(conversations::Column::BuyerId.eq(buyer_id))
        .one(db)
        .await
}

/// Insert a new conversation. The creating side starts as read.
pub async fn insert_conversation(
    db: &DatabaseConnection,
    seller_id: Uuid,
    buyer_id: Uuid,
    created_by_seller: bool,
) -> Result<conversations::Model, DbErr> {
    let new_conversation = conversations::ActiveModel {
        id: Set(Uuid::new_v4()),
        seller_id: Set(seller_id),
        buyer_id: Set(buyer_id),
        read_by_seller: Set(created_by_seller),
        read_by_buyer: Set(!created_by_seller),
        last_message: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_conversation.insert(db).await
}

/// Fetch a single conversation by ID.
pub async fn get_conversation_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<conversations::Model>, DbErr> {
    conversations::Entity::find_by_id(id).one(db).await
}

/// Fetch all conversations the user takes part in, most recent activity first.
pub async fn get_conversations_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<conversations::Model>, DbErr> {
    conversations::Entity::find()
        .filter(
            Condition::any()
                .add(conversations::Column::SellerId.eq(user_id))
                .add(conversations::Column::BuyerId.eq(user_id)),
        )
        .order_by_desc(conversations::Column::UpdatedAt)
        .order_by_desc(conversations::Column::CreatedAt)
        .all(db)
        .await
}

/// Mark a conversation read for whichever side the user is on.
pub async fn mark_read(
    db: &DatabaseConnection,
    conversation: conversations::Model,
    user_id: Uuid,
) -> Result<conversations::Model, DbErr> {
    let is_seller = conversation.seller_id == user_id;

    let mut active: conversations::ActiveModel = conversation.into();
    if is_seller {
        active.read_by_seller = Set(true);
    } else {
        active.read_by_buyer = Set(true);
    }

    active.update(db).await
}

/// Record the latest message text and flip the read flags: read for the
/// sender's side, unread for the other.
pub async fn touch_last_message(
    db: &DatabaseConnection,
    conversation: conversations::Model,
    sender_id: Uuid,
    content: &str,
) -> Result<conversations::Model, DbErr> {
    let sender_is_seller = conversation.seller_id == sender_id;

    let mut active: conversations::ActiveModel = conversation.into();
    active.last_message = Set(Some(content.to_string()));
    active.read_by_seller = Set(sender_is_seller);
    active.read_by_buyer = Set(!sender_is_seller);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
