///! Tests for the like toggle against a mocked database.
///!
///! `db::gigs::toggle_like` distinguishes a missing gig (None) from a real
///! database failure; these tests pin that contract down with SeaORM's
///! MockDatabase, no Postgres needed.
///!
///! Run with: `cargo test --test gig_like_test`
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use scribehub_backend::db::gigs::toggle_like;
use scribehub_backend::models::gigs::{self, Categories, GigStatus, LikedBy};
use scribehub_backend::models::users::StringList;

fn gig(liked_by: Vec<Uuid>) -> gigs::Model {
    gigs::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: "Dissertation literature review".to_string(),
        description: "Chapter-length literature review".to_string(),
        category: Categories::LiteratureReview,
        price_min: 80.0,
        price_max: 300.0,
        delivery_time: 14,
        pages: 1,
        price_per_page: 0.0,
        discount_enabled: false,
        discount_amount: 0.0,
        discount_condition: String::new(),
        cover: None,
        images: StringList::default(),
        document_data: None,
        document_content_type: None,
        document_filename: None,
        document_size: None,
        has_document: false,
        status: GigStatus::Available,
        liked_by: LikedBy(liked_by),
        total_stars: 0,
        star_number: 0,
        sales: 0,
        created_at: chrono::Utc::now(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_toggle_like_on_missing_gig_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<gigs::Model>::new()])
        .into_connection();

    let result = toggle_like(&db, Uuid::new_v4(), Uuid::new_v4())
        .await
        .expect("lookup should succeed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_toggle_like_adds_the_caller() {
    let user_id = Uuid::new_v4();
    let before = gig(vec![]);
    let mut after = before.clone();
    after.liked_by = LikedBy(vec![user_id]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![before.clone()], vec![after]])
        .into_connection();

    let (updated, liked) = toggle_like(&db, before.id, user_id)
        .await
        .expect("update should succeed")
        .expect("gig exists");
    assert!(liked);
    assert_eq!(updated.liked_by.0, vec![user_id]);
}

#[tokio::test]
async fn test_toggle_like_removes_an_existing_like() {
    let user_id = Uuid::new_v4();
    let before = gig(vec![user_id]);
    let mut after = before.clone();
    after.liked_by = LikedBy(vec![]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![before.clone()], vec![after]])
        .into_connection();

    let (updated, liked) = toggle_like(&db, before.id, user_id)
        .await
        .expect("update should succeed")
        .expect("gig exists");
    assert!(!liked);
    assert!(updated.liked_by.0.is_empty());
}
