use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::gigs as gig_db;
use crate::db::users as user_db;
use crate::models::users;

/// Condensed user row for admin listings.
#[derive(Debug, Clone, serde::Serialize)]
struct AdminUser {
    id: Uuid,
    username: String,
    email: String,
    is_seller: bool,
    verified: bool,
    created_at: sea_orm::prelude::DateTimeUtc,
}

impl From<&users::Model> for AdminUser {
    fn from(u: &users::Model) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
            is_seller: u.is_seller,
            verified: u.verified,
            created_at: u.created_at,
        }
    }
}

/// GET /api/admin/overview — all users plus all gigs with creator info.
pub async fn get_overview(db: web::Data<DatabaseConnection>) -> impl Responder {
    let all_users = match user_db::get_all_users(db.get_ref()).await {
        Ok(users) => users,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    let all_gigs = match gig_db::get_all_gigs(db.get_ref()).await {
        Ok(gigs) => gigs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let user_map: HashMap<Uuid, &users::Model> = all_users.iter().map(|u| (u.id, u)).collect();

    let gigs_with_creators: Vec<serde_json::Value> = all_gigs
        .iter()
        .map(|g| {
            let creator = user_map.get(&g.user_id).map(|u| {
                serde_json::json!({
                    "id": u.id,
                    "username": u.username,
                    "email": u.email,
                })
            });
            serde_json::json!({
                "id": g.id,
                "title": g.title,
                "category": g.category,
                "user_id": g.user_id,
                "status": g.status,
                "price_min": g.price_min,
                "price_max": g.price_max,
                "created_at": g.created_at,
                "creator": creator,
            })
        })
        .collect();

    let user_rows: Vec<AdminUser> = all_users.iter().map(AdminUser::from).collect();

    HttpResponse::Ok().json(serde_json::json!({
        "users": user_rows,
        "gigs": gigs_with_creators,
    }))
}

/// GET /api/admin/users — condensed user listing.
pub async fn list_users(db: web::Data<DatabaseConnection>) -> impl Responder {
    match user_db::get_all_users(db.get_ref()).await {
        Ok(users) => {
            let rows: Vec<AdminUser> = users.iter().map(AdminUser::from).collect();
            HttpResponse::Ok().json(rows)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/admin/gigs — full gig listing.
pub async fn list_gigs(db: web::Data<DatabaseConnection>) -> impl Responder {
    match gig_db::get_all_gigs(db.get_ref()).await {
        Ok(gigs) => HttpResponse::Ok().json(gigs),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// DELETE /api/admin/users/{id}.
pub async fn delete_user(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match user_db::delete_user(db.get_ref(), id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("User {id} deleted"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete user: {e}"),
        })),
    }
}

/// DELETE /api/admin/gigs/{id}.
pub async fn delete_gig(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match gig_db::delete_gig(db.get_ref(), id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Gig {id} deleted"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete gig: {e}"),
        })),
    }
}
