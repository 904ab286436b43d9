use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::conversations as conversation_db;
use crate::models::conversations::CreateConversation;

/// POST /api/conversations — find or create the thread with another user.
///
/// The caller's seller flag decides which side of the thread they occupy.
pub async fn create_conversation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateConversation>,
) -> impl Responder {
    let other = body.to;
    if other == user.0.id {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "You cannot start a conversation with yourself",
        }));
    }

    let (seller_id, buyer_id) = if user.0.is_seller {
        (user.0.id, other)
    } else {
        (other, user.0.id)
    };

    match conversation_db::find_between(db.get_ref(), seller_id, buyer_id).await {
        Ok(Some(existing)) => HttpResponse::Ok().json(existing),
        Ok(None) => {
            match conversation_db::insert_conversation(
                db.get_ref(),
                seller_id,
                buyer_id,
                user.0.is_seller,
            )
            .await
            {
                Ok(conversation) => HttpResponse::Created().json(conversation),
                Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to create conversation: {e}"),
                })),
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/conversations — the caller's conversations, latest activity first.
pub async fn get_conversations(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match conversation_db::get_conversations_for_user(db.get_ref(), user.0.id).await {
        Ok(conversations) => HttpResponse::Ok().json(conversations),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/conversations/single/{id} — one conversation. Participants only.
pub async fn get_conversation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match conversation_db::get_conversation_by_id(db.get_ref(), id).await {
        Ok(Some(conversation)) if conversation.involves(user.0.id) => {
            HttpResponse::Ok().json(conversation)
        }
        Ok(Some(_)) => HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not part of this conversation",
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Conversation {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/conversations/{id} — mark the thread read for the caller's side.
pub async fn mark_conversation_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let conversation = match conversation_db::get_conversation_by_id(db.get_ref(), id).await {
        Ok(Some(conversation)) if conversation.involves(user.0.id) => conversation,
        Ok(Some(_)) => {
            return HttpResponse::Forbidden().json(serde_json::json!({
                "error": "You are not part of this conversation",
            }));
        }
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Conversation {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match conversation_db::mark_read(db.get_ref(), conversation, user.0.id).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update conversation: {e}"),
        })),
    }
}
