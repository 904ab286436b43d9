use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Bcrypt hash. Never serialized into API responses.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub img: Option<String>,
    pub country: String,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub full_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: EducationList,
    #[sea_orm(column_type = "JsonBinary")]
    pub certifications: CertificationList,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: SocialLinks,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: StringList,
    pub is_seller: bool,
    pub verified: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gigs::Entity")]
    Gigs,
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gigs.def()
    }
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── JSON-column value types ──

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EducationList(pub Vec<EducationEntry>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub qualification: String,
    pub grade: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CertificationList(pub Vec<Certification>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: Option<String>,
    pub url: Option<String>,
    pub issued_on: Option<String>,
    pub credential_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

// ── DTOs (not stored in DB, used for request bodies) ──

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub img: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_seller: bool,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Self-service profile update. Every field optional; only present fields change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub img: Option<String>,
    pub country: Option<String>,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub education: Option<EducationList>,
    pub certifications: Option<CertificationList>,
    pub social: Option<SocialLinks>,
    pub experience: Option<StringList>,
}

/// A safe user representation for API responses (never leaks the password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub img: Option<String>,
    pub country: String,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub education: EducationList,
    pub certifications: CertificationList,
    pub social: SocialLinks,
    pub experience: StringList,
    pub is_seller: bool,
    pub verified: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            img: m.img,
            country: m.country,
            nationality: m.nationality,
            phone: m.phone,
            description: m.description,
            full_name: m.full_name,
            bio: m.bio,
            education: m.education,
            certifications: m.certifications,
            social: m.social,
            experience: m.experience,
            is_seller: m.is_seller,
            verified: m.verified,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
