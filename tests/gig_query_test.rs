///! Tests for the gig listing query spec and the status vocabulary.
///!
///! The listing endpoint deserializes its query string into `GigListQuery`;
///! these tests pin down the sort allow-list (unknown sort fields must fail
///! before any SQL is built), the WHERE clause built from the query, and the
///! wire spellings of the status enums.
///!
///! Run with: `cargo test --test gig_query_test`
use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryOrder, QueryTrait};
use serde_json::json;

use scribehub_backend::models::bids::BidStatus;
use scribehub_backend::models::gigs;
use scribehub_backend::models::gigs::{Categories, GigListQuery, GigStatus, SortField};

/// Render the listing query the way `db::gigs::list_gigs` builds it.
fn listing_sql(query: &GigListQuery) -> String {
    gigs::Entity::find()
        .filter(query.condition())
        .order_by_desc(query.sort().column())
        .build(DbBackend::Postgres)
        .to_string()
}

#[test]
fn test_empty_query_defaults_to_created_at_sort() {
    let query: GigListQuery = serde_json::from_value(json!({})).unwrap();
    assert!(query.user_id.is_none());
    assert!(query.status.is_none());
    assert_eq!(query.sort(), SortField::CreatedAt);
}

#[test]
fn test_known_sort_fields_are_accepted() {
    for (raw, expected) in [
        ("created_at", SortField::CreatedAt),
        ("price_min", SortField::PriceMin),
        ("price_max", SortField::PriceMax),
        ("delivery_time", SortField::DeliveryTime),
        ("total_stars", SortField::TotalStars),
        ("sales", SortField::Sales),
    ] {
        let query: GigListQuery = serde_json::from_value(json!({ "sort": raw }))
            .unwrap_or_else(|e| panic!("sort={raw} should deserialize: {e}"));
        assert_eq!(query.sort(), expected);
    }
}

#[test]
fn test_unknown_sort_field_is_rejected() {
    // A raw column expression must never reach the query builder.
    for raw in ["price; DROP TABLE gigs", "createdAt", "id", ""] {
        let result: Result<GigListQuery, _> = serde_json::from_value(json!({ "sort": raw }));
        assert!(result.is_err(), "sort={raw:?} should be rejected");
    }
}

#[test]
fn test_full_query_deserializes() {
    let query: GigListQuery = serde_json::from_value(json!({
        "user_id": "7c7e3e0e-3f7b-4a86-9a57-a7a3cf2f63b1",
        "category": "research_paper",
        "search": "thesis",
        "min": 40.0,
        "max": 120.0,
        "status": "in_progress",
        "sort": "sales",
    }))
    .unwrap();

    assert_eq!(query.category, Some(Categories::ResearchPaper));
    assert_eq!(query.search.as_deref(), Some("thesis"));
    assert_eq!(query.min, Some(40.0));
    assert_eq!(query.max, Some(120.0));
    assert_eq!(query.status, Some(GigStatus::InProgress));
    assert_eq!(query.sort(), SortField::Sales);
}

#[test]
fn test_listing_defaults_to_available_gigs_only() {
    let sql = listing_sql(&GigListQuery::default());
    assert!(
        sql.contains(r#""status" = 'available'"#),
        "default listing must hide non-available gigs: {sql}"
    );
}

#[test]
fn test_explicit_status_returns_gigs_of_any_status() {
    // Presence of the parameter drops the predicate; its value is unused.
    for status in [
        GigStatus::Available,
        GigStatus::InProgress,
        GigStatus::Completed,
    ] {
        let query = GigListQuery {
            status: Some(status),
            ..Default::default()
        };
        let sql = listing_sql(&query);
        assert!(
            !sql.contains(r#""status" ="#),
            "explicit status must not filter by status: {sql}"
        );
    }
}

#[test]
fn test_listing_filters_compose() {
    let query = GigListQuery {
        category: Some(Categories::Thesis),
        search: Some("methodology".to_string()),
        min: Some(40.0),
        max: Some(120.0),
        ..Default::default()
    };
    let sql = listing_sql(&query);

    assert!(sql.contains(r#""category" = 'thesis'"#), "{sql}");
    assert!(sql.contains("ILIKE"), "{sql}");
    assert!(sql.contains("%methodology%"), "{sql}");
    assert!(sql.contains(r#""price_min" >="#), "{sql}");
    assert!(sql.contains(r#""price_min" <="#), "{sql}");
    // No explicit status requested, so the available-only default applies.
    assert!(sql.contains(r#""status" = 'available'"#), "{sql}");
}

#[test]
fn test_gig_status_wire_spellings() {
    assert_eq!(
        serde_json::to_value(GigStatus::Available).unwrap(),
        json!("available")
    );
    assert_eq!(
        serde_json::to_value(GigStatus::InProgress).unwrap(),
        json!("in_progress")
    );
    assert_eq!(
        serde_json::to_value(GigStatus::Completed).unwrap(),
        json!("completed")
    );
}

#[test]
fn test_bid_status_wire_spellings() {
    for (status, raw) in [
        (BidStatus::Pending, "pending"),
        (BidStatus::Approved, "approved"),
        (BidStatus::Rejected, "rejected"),
        (BidStatus::InProgress, "in_progress"),
        (BidStatus::Completed, "completed"),
    ] {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(raw));
        assert_eq!(
            serde_json::from_value::<BidStatus>(json!(raw)).unwrap(),
            status
        );
    }
}
