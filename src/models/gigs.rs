use sea_orm::entity::prelude::*;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{Condition, prelude::Expr};
use serde::{Deserialize, Serialize};

/// Gig status stored as a lowercase string in the database.
///
/// Moves forward only: available → in_progress → completed. The bid workflow
/// never reverses a transition; the owner status PATCH is the one exception
/// and may set any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum GigStatus {
    #[sea_orm(string_value = "available")]
    #[serde(rename = "available")]
    Available,
    #[sea_orm(string_value = "in_progress")]
    #[serde(rename = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    #[serde(rename = "completed")]
    Completed,
}

/// Academic-writing service categories, stored as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Categories {
    #[sea_orm(string_value = "essay_writing")]
    EssayWriting,
    #[sea_orm(string_value = "college_essay")]
    CollegeEssay,
    #[sea_orm(string_value = "coursework")]
    Coursework,
    #[sea_orm(string_value = "dissertation")]
    Dissertation,
    #[sea_orm(string_value = "custom_essay")]
    CustomEssay,
    #[sea_orm(string_value = "research_paper")]
    ResearchPaper,
    #[sea_orm(string_value = "term_paper")]
    TermPaper,
    #[sea_orm(string_value = "thesis")]
    Thesis,
    #[sea_orm(string_value = "case_study")]
    CaseStudy,
    #[sea_orm(string_value = "literature_review")]
    LiteratureReview,
    #[sea_orm(string_value = "other")]
    Other,
}

/// SeaORM entity for the `gigs` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Categories,
    #[sea_orm(column_type = "Double")]
    pub price_min: f64,
    #[sea_orm(column_type = "Double")]
    pub price_max: f64,
    /// Delivery window in days; bid day counts must fall within [1, delivery_time].
    pub delivery_time: i32,
    pub pages: i32,
    #[sea_orm(column_type = "Double")]
    pub price_per_page: f64,
    pub discount_enabled: bool,
    #[sea_orm(column_type = "Double")]
    pub discount_amount: f64,
    pub discount_condition: String,
    pub cover: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: super::users::StringList,
    /// Embedded document stored directly in the row. Skipped in API
    /// responses; downloads go through the dedicated document route.
    #[sea_orm(column_type = "Blob", nullable)]
    #[serde(skip_serializing, default)]
    pub document_data: Option<Vec<u8>>,
    pub document_content_type: Option<String>,
    pub document_filename: Option<String>,
    pub document_size: Option<i64>,
    pub has_document: bool,
    pub status: GigStatus,
    #[sea_orm(column_type = "JsonBinary")]
    pub liked_by: LikedBy,
    pub total_stars: i32,
    pub star_number: i32,
    pub sales: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Set of user ids that liked a gig, persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LikedBy(pub Vec<Uuid>);

// ── DTOs ──

/// Fields accepted when creating a gig. Assembled from the multipart form;
/// the optional document arrives as a separate file part.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGig {
    pub title: String,
    pub description: String,
    pub category: Categories,
    pub price_min: f64,
    pub price_max: f64,
    pub delivery_time: i32,
    pub pages: Option<i32>,
    pub price_per_page: Option<f64>,
    pub discount_enabled: Option<bool>,
    pub discount_amount: Option<f64>,
    pub discount_condition: Option<String>,
    pub cover: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Owner edit. Every field optional; only present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Categories>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub delivery_time: Option<i32>,
    pub pages: Option<i32>,
    pub price_per_page: Option<f64>,
    pub discount_enabled: Option<bool>,
    pub discount_amount: Option<f64>,
    pub discount_condition: Option<String>,
    pub cover: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Body for the owner-direct status override (PATCH /gigs/{gig_id}/status).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGigStatus {
    pub status: GigStatus,
}

/// An uploaded document extracted from the multipart payload.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub data: Vec<u8>,
    pub content_type: String,
    pub filename: String,
}

/// Allowed sort fields for gig listing. Anything else fails deserialization
/// and surfaces as a 400 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    PriceMin,
    PriceMax,
    DeliveryTime,
    TotalStars,
    Sales,
}

impl SortField {
    pub fn column(self) -> Column {
        match self {
            SortField::CreatedAt => Column::CreatedAt,
            SortField::PriceMin => Column::PriceMin,
            SortField::PriceMax => Column::PriceMax,
            SortField::DeliveryTime => Column::DeliveryTime,
            SortField::TotalStars => Column::TotalStars,
            SortField::Sales => Column::Sales,
        }
    }
}

/// Query spec for GET /gigs. Each field maps to one predicate; when no
/// explicit status is requested the listing defaults to available gigs only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GigListQuery {
    pub user_id: Option<Uuid>,
    pub category: Option<Categories>,
    /// Case-insensitive title substring match.
    pub search: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Presence alone disables the available-only default; the value is
    /// not used as a filter and the listing returns gigs of any status.
    pub status: Option<GigStatus>,
    pub sort: Option<SortField>,
}

impl GigListQuery {
    pub fn sort(&self) -> SortField {
        self.sort.unwrap_or(SortField::CreatedAt)
    }

    /// Build the listing WHERE clause. Each present field contributes one
    /// predicate, except `status`: without it the listing is restricted to
    /// available gigs, with it no status predicate is added at all.
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(user_id) = self.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(category) = self.category {
            condition = condition.add(Column::Category.eq(category));
        }
        if let Some(search) = self.search.as_deref() {
            condition = condition.add(Expr::col(Column::Title).ilike(format!("%{search}%")));
        }
        if let Some(min) = self.min {
            condition = condition.add(Column::PriceMin.gte(min));
        }
        if let Some(max) = self.max {
            condition = condition.add(Column::PriceMin.lte(max));
        }
        if self.status.is_none() {
            condition = condition.add(Column::Status.eq(GigStatus::Available));
        }

        condition
    }
}
