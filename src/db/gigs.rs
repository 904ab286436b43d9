use sea_orm::*;
use uuid::Uuid;

use crate::models::gigs::{
    self, CreateGig, GigListQuery, GigStatus, UpdateGig, UploadedDocument,
};

/// Insert a new gig with an optional embedded document.
pub async fn insert_gig(
    db: &DatabaseConnection,
    input: CreateGig,
    document: Option<UploadedDocument>,
    user_id: Uuid,
) -> Result<gigs::Model, DbErr> {
    let has_document = document.is_some();
    let (data, content_type, filename, size) = match document {
        Some(doc) => {
            let size = doc.data.len() as i64;
            (Some(doc.data), Some(doc.content_type), Some(doc.filename), Some(size))
        }
        None => (None, None, None, None),
    };

    let new_gig = gigs::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        title: Set(input.title),
        description: Set(input.description),
        category: Set(input.category),
        price_min: Set(input.price_min),
        price_max: Set(input.price_max),
        delivery_time: Set(input.delivery_time),
        pages: Set(input.pages.unwrap_or(1)),
        price_per_page: Set(input.price_per_page.unwrap_or(0.0)),
        discount_enabled: Set(input.discount_enabled.unwrap_or(false)),
        discount_amount: Set(input.discount_amount.unwrap_or(0.0)),
        discount_condition: Set(input.discount_condition.unwrap_or_default()),
        cover: Set(input.cover),
        images: Set(crate::models::users::StringList(
            input.images.unwrap_or_default(),
        )),
        document_data: Set(data),
        document_content_type: Set(content_type),
        document_filename: Set(filename),
        document_size: Set(size),
        has_document: Set(has_document),
        status: Set(GigStatus::Available),
        liked_by: Set(Default::default()),
        total_stars: Set(0),
        star_number: Set(0),
        sales: Set(0),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_gig.insert(db).await
}

/// Fetch a single gig by ID.
pub async fn get_gig_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<gigs::Model>, DbErr> {
    gigs::Entity::find_by_id(id).one(db).await
}

/// List gigs against the query spec. The WHERE clause comes from
/// [`GigListQuery::condition`]; with no explicit status the listing hides
/// in-progress and completed gigs, while any explicit status returns gigs
/// regardless of status. Sort is always descending on the requested column.
pub async fn list_gigs(
    db: &DatabaseConnection,
    query: &GigListQuery,
) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .filter(query.condition())
        .order_by_desc(query.sort().column())
        .all(db)
        .await
}

/// Fetch all gigs owned by a user.
pub async fn get_gigs_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .filter(gigs::Column::UserId.eq(user_id))
        .all(db)
        .await
}

/// Fetch a user's most recent gigs (seller dashboard).
pub async fn get_recent_gigs_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    limit: u64,
) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .filter(gigs::Column::UserId.eq(user_id))
        .order_by_desc(gigs::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
}

/// Count gigs owned by a user.
pub async fn count_gigs_by_user(db: &DatabaseConnection, user_id: Uuid) -> Result<u64, DbErr> {
    gigs::Entity::find()
        .filter(gigs::Column::UserId.eq(user_id))
        .count(db)
        .await
}

/// Fetch a set of gigs by id (bid decoration).
pub async fn get_gigs_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<gigs::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    gigs::Entity::find()
        .filter(gigs::Column::Id.is_in(ids))
        .all(db)
        .await
}

/// Fetch all gigs (admin listing).
pub async fn get_all_gigs(db: &DatabaseConnection) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find().all(db).await
}

/// Update an existing gig's editable fields and, when provided, replace the
/// embedded document.
pub async fn update_gig(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateGig,
    document: Option<UploadedDocument>,
) -> Result<gigs::Model, DbErr> {
    let gig = gigs::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Gig not found".to_string()))?;

    let mut active: gigs::ActiveModel = gig.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(price_min) = input.price_min {
        active.price_min = Set(price_min);
    }
    if let Some(price_max) = input.price_max {
        active.price_max = Set(price_max);
    }
    if let Some(delivery_time) = input.delivery_time {
        active.delivery_time = Set(delivery_time);
    }
    if let Some(pages) = input.pages {
        active.pages = Set(pages);
    }
    if let Some(price_per_page) = input.price_per_page {
        active.price_per_page = Set(price_per_page);
    }
    if let Some(discount_enabled) = input.discount_enabled {
        active.discount_enabled = Set(discount_enabled);
    }
    if let Some(discount_amount) = input.discount_amount {
        active.discount_amount = Set(discount_amount);
    }
    if let Some(discount_condition) = input.discount_condition {
        active.discount_condition = Set(discount_condition);
    }
    if let Some(cover) = input.cover {
        active.cover = Set(Some(cover));
    }
    if let Some(images) = input.images {
        active.images = Set(crate::models::users::StringList(images));
    }
    if let Some(doc) = document {
        active.document_size = Set(Some(doc.data.len() as i64));
        active.document_data = Set(Some(doc.data));
        active.document_content_type = Set(Some(doc.content_type));
        active.document_filename = Set(Some(doc.filename));
        active.has_document = Set(true);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Set a gig's status directly (owner override; bypasses bid-driven guards).
pub async fn set_gig_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: GigStatus,
) -> Result<gigs::Model, DbErr> {
    let gig = gigs::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Gig not found".to_string()))?;

    let mut active: gigs::ActiveModel = gig.into();
    active.status = Set(status);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Toggle a like on a gig for one user. Returns the updated gig and whether
/// the user now likes it, or None when the gig does not exist.
pub async fn toggle_like(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<(gigs::Model, bool)>, DbErr> {
    let Some(gig) = gigs::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut liked_by = gig.liked_by.clone();
    let liked = if let Some(pos) = liked_by.0.iter().position(|u| *u == user_id) {
        liked_by.0.remove(pos);
        false
    } else {
        liked_by.0.push(user_id);
        true
    };

    let mut active: gigs::ActiveModel = gig.into();
    active.liked_by = Set(liked_by);

    let updated = active.update(db).await?;
    Ok(Some((updated, liked)))
}

/// Delete a gig by ID.
pub async fn delete_gig(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    gigs::Entity::delete_by_id(id).exec(db).await
}
