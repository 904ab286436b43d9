use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};
use futures_util::StreamExt;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::verify_gig_owner;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::bids as bid_db;
use crate::db::gigs as gig_db;
use crate::models::bids::BidStatus;
use crate::models::gigs::{
    Categories, CreateGig, GigListQuery, UpdateGig, UpdateGigStatus, UploadedDocument,
};

/// Maximum size of an embedded gig document (10 MB).
const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Drain a multipart payload into text fields plus an optional `document`
/// file part.
async fn parse_gig_form(
    mut payload: Multipart,
) -> Result<(HashMap<String, String>, Option<UploadedDocument>), String> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut document: Option<UploadedDocument> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Multipart error: {e}"))?;

        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(String::from)
            .ok_or_else(|| "Missing field name".to_string())?;
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(String::from);
        let content_type = field.content_type().map(|m| m.to_string());

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| format!("Read error: {e}"))?;
            if data.len() + chunk.len() > MAX_DOCUMENT_SIZE {
                return Err("Document exceeds the 10MB limit".to_string());
            }
            data.extend_from_slice(&chunk);
        }

        if name == "document" {
            if !data.is_empty() {
                document = Some(UploadedDocument {
                    data,
                    content_type: content_type
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                    filename: filename.unwrap_or_else(|| "document".to_string()),
                });
            }
        } else {
            let value =
                String::from_utf8(data).map_err(|_| format!("Field {name} is not valid UTF-8"))?;
            fields.insert(name, value);
        }
    }

    Ok((fields, document))
}

fn parse_field<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    name: &str,
) -> Result<Option<T>, String> {
    match fields.get(name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid value for {name}")),
        None => Ok(None),
    }
}

fn parse_category(raw: &str) -> Result<Categories, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|_| format!("Unknown category: {raw}"))
}

fn parse_images(raw: &str) -> Result<Vec<String>, String> {
    serde_json::from_str(raw).map_err(|_| "images must be a JSON array of URLs".to_string())
}

fn create_gig_from_fields(fields: &HashMap<String, String>) -> Result<CreateGig, String> {
    let title = fields
        .get("title")
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .ok_or_else(|| "title is required".to_string())?;
    let description = fields
        .get("description")
        .filter(|d| !d.trim().is_empty())
        .cloned()
        .ok_or_else(|| "description is required".to_string())?;
    let category = parse_category(
        fields
            .get("category")
            .ok_or_else(|| "category is required".to_string())?,
    )?;
    let price_min: f64 =
        parse_field(fields, "price_min")?.ok_or_else(|| "price_min is required".to_string())?;
    let price_max: f64 =
        parse_field(fields, "price_max")?.ok_or_else(|| "price_max is required".to_string())?;
    let delivery_time: i32 = parse_field(fields, "delivery_time")?
        .ok_or_else(|| "delivery_time is required".to_string())?;

    if price_min <= 0.0 || price_max < price_min {
        return Err("price range is invalid".to_string());
    }
    if delivery_time < 1 {
        return Err("delivery_time must be at least 1 day".to_string());
    }

    Ok(CreateGig {
        title,
        description,
        category,
        price_min,
        price_max,
        delivery_time,
        pages: parse_field(fields, "pages")?,
        price_per_page: parse_field(fields, "price_per_page")?,
        discount_enabled: parse_field(fields, "discount_enabled")?,
        discount_amount: parse_field(fields, "discount_amount")?,
        discount_condition: fields.get("discount_condition").cloned(),
        cover: fields.get("cover").cloned(),
        images: fields.get("images").map(|raw| parse_images(raw)).transpose()?,
    })
}

fn update_gig_from_fields(fields: &HashMap<String, String>) -> Result<UpdateGig, String> {
    Ok(UpdateGig {
        title: fields.get("title").cloned(),
        description: fields.get("description").cloned(),
        category: fields
            .get("category")
            .map(|raw| parse_category(raw))
            .transpose()?,
        price_min: parse_field(fields, "price_min")?,
        price_max: parse_field(fields, "price_max")?,
        delivery_time: parse_field(fields, "delivery_time")?,
        pages: parse_field(fields, "pages")?,
        price_per_page: parse_field(fields, "price_per_page")?,
        discount_enabled: parse_field(fields, "discount_enabled")?,
        discount_amount: parse_field(fields, "discount_amount")?,
        discount_condition: fields.get("discount_condition").cloned(),
        cover: fields.get("cover").cloned(),
        images: fields.get("images").map(|raw| parse_images(raw)).transpose()?,
    })
}

/// POST /api/gigs — create a gig (multipart; optional embedded document).
/// Sellers only.
pub async fn create_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    payload: Multipart,
) -> impl Responder {
    if !user.0.is_seller {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only sellers can create a gig",
        }));
    }

    let (fields, document) = match parse_gig_form(payload).await {
        Ok(parsed) => parsed,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e }));
        }
    };

    let input = match create_gig_from_fields(&fields) {
        Ok(input) => input,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e }));
        }
    };

    match gig_db::insert_gig(db.get_ref(), input, document, user.0.id).await {
        Ok(gig) => {
            tracing::info!(gig_id = %gig.id, user_id = %user.0.id, "gig created");
            HttpResponse::Created().json(gig)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create gig: {e}"),
        })),
    }
}

/// GET /api/gigs — public listing with filters. Unknown sort fields fail
/// query deserialization and never reach this handler.
pub async fn get_gigs(
    db: web::Data<DatabaseConnection>,
    query: web::Query<GigListQuery>,
) -> impl Responder {
    match gig_db::list_gigs(db.get_ref(), &query).await {
        Ok(gigs) => HttpResponse::Ok().json(gigs),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch gigs: {e}"),
        })),
    }
}

/// GET /api/gigs/single/{id} — fetch one gig (public).
pub async fn get_gig(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match gig_db::get_gig_by_id(db.get_ref(), id).await {
        Ok(Some(gig)) => HttpResponse::Ok().json(gig),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Gig {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/gigs/{id}/document — download the embedded document (public).
pub async fn get_gig_document(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match gig_db::get_gig_by_id(db.get_ref(), id).await {
        Ok(Some(gig)) if gig.has_document && gig.document_data.is_some() => {
            let filename = gig
                .document_filename
                .unwrap_or_else(|| "document".to_string());
            HttpResponse::Ok()
                .content_type(
                    gig.document_content_type
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                )
                .insert_header((
                    "Content-Disposition",
                    format!("inline; filename=\"{filename}\""),
                ))
                .body(gig.document_data.unwrap_or_default())
        }
        Ok(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Document not found",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PATCH /api/gigs/{id} — owner edit (multipart; optional replacement
/// document).
pub async fn update_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(resp) = verify_gig_owner(db.get_ref(), id, user.0.id).await {
        return resp;
    }

    let (fields, document) = match parse_gig_form(payload).await {
        Ok(parsed) => parsed,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e }));
        }
    };

    let input = match update_gig_from_fields(&fields) {
        Ok(input) => input,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e }));
        }
    };

    match gig_db::update_gig(db.get_ref(), id, input, document).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update gig: {e}"),
        })),
    }
}

/// PATCH /api/gigs/{gig_id}/status — owner-direct status override.
///
/// This path deliberately bypasses the bid-driven transition guards; it is
/// the owner's self-service escape hatch and can set any valid status.
pub async fn update_gig_status(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGigStatus>,
) -> impl Responder {
    let gig_id = path.into_inner();

    if let Err(resp) = verify_gig_owner(db.get_ref(), gig_id, user.0.id).await {
        return resp;
    }

    match gig_db::set_gig_status(db.get_ref(), gig_id, body.status).await {
        Ok(updated) => {
            tracing::info!(gig_id = %gig_id, status = ?updated.status, "owner status override");
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update gig status: {e}"),
        })),
    }
}

/// POST /api/gigs/{id}/like — toggle a like for the authenticated user.
pub async fn toggle_like(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match gig_db::toggle_like(db.get_ref(), id, user.0.id).await {
        Ok(Some((gig, liked))) => HttpResponse::Ok().json(serde_json::json!({
            "liked": liked,
            "likes": gig.liked_by.0.len(),
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Gig {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/gigs/stats — seller dashboard aggregates.
pub async fn get_seller_stats(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let user_id = user.0.id;

    let total_gigs = match gig_db::count_gigs_by_user(db.get_ref(), user_id).await {
        Ok(count) => count,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let own_gigs = match gig_db::get_gigs_by_user_id(db.get_ref(), user_id).await {
        Ok(gigs) => gigs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    let gig_ids: Vec<Uuid> = own_gigs.iter().map(|g| g.id).collect();

    let active_bids = match bid_db::get_bids_for_gigs_with_statuses(
        db.get_ref(),
        gig_ids.clone(),
        vec![BidStatus::Pending, BidStatus::Approved, BidStatus::InProgress],
    )
    .await
    {
        Ok(bids) => bids.len(),
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let total_revenue = match bid_db::get_bids_for_gigs_with_statuses(
        db.get_ref(),
        gig_ids,
        vec![BidStatus::Completed],
    )
    .await
    {
        Ok(bids) => bids.iter().map(|b| b.amount).sum::<f64>(),
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let recent_gigs = match gig_db::get_recent_gigs_by_user(db.get_ref(), user_id, 5).await {
        Ok(gigs) => gigs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    HttpResponse::Ok().json(serde_json::json!({
        "total_gigs": total_gigs,
        "active_bids": active_bids,
        "total_revenue": total_revenue,
        "recent_gigs": recent_gigs,
    }))
}

/// DELETE /api/gigs/{id} — owner delete.
pub async fn delete_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(resp) = verify_gig_owner(db.get_ref(), id, user.0.id).await {
        return resp;
    }

    match gig_db::delete_gig(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Gig {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Gig {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete gig: {e}"),
        })),
    }
}
