use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, RegisterUser, UpdateUser};

/// Insert a new user. The password must already be hashed by the caller.
pub async fn insert_user(
    db: &DatabaseConnection,
    input: RegisterUser,
    password_hash: String,
) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(input.username),
        email: Set(input.email),
        password: Set(password_hash),
        img: Set(input.img),
        country: Set(input.country),
        nationality: Set(None),
        phone: Set(input.phone),
        description: Set(input.description),
        full_name: Set(None),
        bio: Set(None),
        education: Set(Default::default()),
        certifications: Set(Default::default()),
        social: Set(Default::default()),
        experience: Set(Default::default()),
        is_seller: Set(input.is_seller),
        verified: Set(false),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a single user by username (login path).
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await
}

/// True if a user already holds the given username or email.
pub async fn username_or_email_taken(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<bool, DbErr> {
    let count = users::Entity::find()
        .filter(
            Condition::any()
                .add(users::Column::Username.eq(username))
                .add(users::Column::Email.eq(email)),
        )
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Fetch a set of users by id (dashboard decoration).
pub async fn get_users_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<users::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await
}

/// Fetch all users (admin listing).
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find().all(db).await
}

/// Update an existing user's profile fields.
pub async fn update_user(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateUser,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("User not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(img) = input.img {
        active.img = Set(Some(img));
    }
    if let Some(country) = input.country {
        active.country = Set(country);
    }
    if let Some(nationality) = input.nationality {
        active.nationality = Set(Some(nationality));
    }
    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(full_name) = input.full_name {
        active.full_name = Set(Some(full_name));
    }
    if let Some(bio) = input.bio {
        active.bio = Set(Some(bio));
    }
    if let Some(education) = input.education {
        active.education = Set(education);
    }
    if let Some(certifications) = input.certifications {
        active.certifications = Set(certifications);
    }
    if let Some(social) = input.social {
        active.social = Set(social);
    }
    if let Some(experience) = input.experience {
        active.experience = Set(experience);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a user by ID.
pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    users::Entity::delete_by_id(id).exec(db).await
}
