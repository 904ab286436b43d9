use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::jwt;
use crate::auth::middleware::{ACCESS_COOKIE, JwtSecret};
use crate::db::users as user_db;
use crate::models::users::{LoginRequest, RegisterUser, UserResponse};

/// POST /api/auth/register — create a user with a bcrypt-hashed password.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    body: web::Json<RegisterUser>,
) -> impl Responder {
    let input = body.into_inner();

    if input.username.trim().is_empty()
        || input.email.trim().is_empty()
        || input.password.is_empty()
        || input.country.trim().is_empty()
    {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required fields",
            "required": ["username", "email", "password", "country"],
        }));
    }

    // Lookup before insert; the unique indexes still backstop a racing
    // duplicate, surfaced by the error mapping below.
    match user_db::username_or_email_taken(db.get_ref(), &input.username, &input.email).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "Username or email already exists",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
        _ => {}
    }

    let hash = match bcrypt::hash(&input.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to hash password: {e}"),
            }));
        }
    };

    match user_db::insert_user(db.get_ref(), input, hash).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "user registered");
            HttpResponse::Created().json(serde_json::json!({
                "message": "user created",
            }))
        }
        Err(e) if e.to_string().contains("duplicate key") => {
            HttpResponse::Conflict().json(serde_json::json!({
                "error": "Username or email already exists",
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create user: {e}"),
        })),
    }
}

/// POST /api/auth/login — verify the password and set the session cookie.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    let user = match user_db::get_user_by_username(db.get_ref(), &body.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "User not found",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match bcrypt::verify(&body.password, &user.password) {
        Ok(true) => {}
        Ok(false) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Wrong password",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to verify password: {e}"),
            }));
        }
    }

    let token = match jwt::sign_token(user.id, user.is_seller, &secret.0) {
        Ok(token) => token,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e,
            }));
        }
    };

    let mut cookie = Cookie::new(ACCESS_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);

    HttpResponse::Ok()
        .cookie(cookie)
        .json(UserResponse::from(user))
}

/// POST /api/auth/logout — clear the session cookie.
pub async fn logout() -> impl Responder {
    let mut cookie = Cookie::new(ACCESS_COOKIE, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.make_removal();

    HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "message": "User has been logged out",
    }))
}
