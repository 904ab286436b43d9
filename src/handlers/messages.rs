use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::conversations as conversation_db;
use crate::db::messages as message_db;
use crate::models::messages::CreateMessage;

/// POST /api/messages — send a message in a conversation the caller is part
/// of; bumps the thread's last_message and read flags.
pub async fn create_message(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateMessage>,
) -> impl Responder {
    let input = body.into_inner();

    if input.content.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Message content is required",
        }));
    }

    let conversation =
        match conversation_db::get_conversation_by_id(db.get_ref(), input.conversation_id).await {
            Ok(Some(conversation)) if conversation.involves(user.0.id) => conversation,
            Ok(Some(_)) => {
                return HttpResponse::Forbidden().json(serde_json::json!({
                    "error": "You are not part of this conversation",
                }));
            }
            Ok(None) => {
                return HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Conversation {} not found", input.conversation_id),
                }));
            }
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Database error: {e}"),
                }));
            }
        };

    let content = input.content.clone();
    let message = match message_db::insert_message(db.get_ref(), input, user.0.id).await {
        Ok(message) => message,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to send message: {e}"),
            }));
        }
    };

    if let Err(e) =
        conversation_db::touch_last_message(db.get_ref(), conversation, user.0.id, &content).await
    {
        tracing::warn!(conversation_id = %message.conversation_id, "failed to bump conversation: {e}");
    }

    HttpResponse::Created().json(message)
}

/// GET /api/messages/{conversation_id} — full history, oldest first.
/// Participants only.
pub async fn get_messages(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let conversation_id = path.into_inner();

    match conversation_db::get_conversation_by_id(db.get_ref(), conversation_id).await {
        Ok(Some(conversation)) if conversation.involves(user.0.id) => {}
        Ok(Some(_)) => {
            return HttpResponse::Forbidden().json(serde_json::json!({
                "error": "You are not part of this conversation",
            }));
        }
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Conversation {conversation_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match message_db::get_messages_by_conversation(db.get_ref(), conversation_id).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
