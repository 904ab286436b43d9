use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt;
use crate::db::users::get_user_by_id;
use crate::models::users;

/// Name of the session cookie set at login.
pub const ACCESS_COOKIE: &str = "accessToken";

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Extractor that authenticates the caller and loads their user row.
///
/// The token is taken from the `accessToken` cookie (the browser client) or
/// a `Bearer` Authorization header (API callers), in that order.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Cookie first, then Bearer header.
            let token = req
                .cookie(ACCESS_COOKIE)
                .map(|c| c.value().to_string())
                .or_else(|| {
                    req.headers()
                        .get("Authorization")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.strip_prefix("Bearer "))
                        .map(|t| t.to_string())
                })
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("You are not authenticated"))?;

            // 2. Validate against the configured secret.
            let secret = req
                .app_data::<web::Data<JwtSecret>>()
                .ok_or_else(|| actix_web::error::ErrorInternalServerError("JWT secret not configured"))?;

            let claims = jwt::validate_token(&token, &secret.0)
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            let user_id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            // 3. Load the user row; a token for a deleted user is rejected.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            let user = get_user_by_id(db.get_ref(), user_id)
                .await
                .map_err(|e| {
                    actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
                })?
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("User no longer exists"))?;

            Ok(AuthenticatedUser(user))
        })
    }
}
