//! HTTP-level tests for the admin dashboard: access control, submission
//! review and catalog management.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, create_user, delete_auth, get, get_auth, post_json, post_json_auth, put_json_auth,
    token_for,
};
use serde_json::json;
use sqlx::PgPool;
use unipath_core::forms::{BookingForm, ContactForm};
use unipath_core::types::DbId;
use unipath_db::models::ambassador::CreateAmbassador;
use unipath_db::repositories::{AmbassadorRepo, BookingRepo, ContactRepo, UniversityRepo};

async fn admin_token(pool: &PgPool) -> String {
    token_for(&create_user(pool, "admin@example.com", "admin").await)
}

async fn seed_contact(pool: &PgPool, name: &str) -> i64 {
    ContactRepo::create(
        pool,
        &ContactForm {
            name: name.to_string(),
            email: "visitor@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Please tell me about fees".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_booking(pool: &PgPool, time: &str) -> i64 {
    seed_booking_with(pool, time, None).await
}

async fn seed_booking_with(pool: &PgPool, time: &str, ambassador_id: Option<DbId>) -> i64 {
    let form = BookingForm {
        name: "Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        phone: None,
        ambassador_id,
        date: Utc::now().date_naive() + Duration::days(7),
        time: time.to_string(),
        topic: None,
        message: None,
    };
    BookingRepo::create(pool, None, &form, time).await.unwrap().id
}

async fn seed_ambassador(pool: &PgPool, name: &str) -> DbId {
    AmbassadorRepo::create(
        pool,
        &CreateAmbassador {
            name: name.to_string(),
            university: "LUMS".to_string(),
            program: "Economics".to_string(),
            location: "Lahore".to_string(),
            rating: 4.7,
            review_count: 3,
            students_helped: 12,
            specialties: vec![],
            is_available: None,
            bio: String::new(),
            image_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn set_booking_status(
    pool: &PgPool,
    token: &str,
    id: i64,
    status: &str,
) -> axum::http::Response<axum::body::Body> {
    put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/submissions/bookings/{id}/status"),
        json!({ "status": status }),
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_routes_require_the_admin_role(pool: PgPool) {
    let student = create_user(&pool, "student@example.com", "student").await;

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/submissions/contacts",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/submissions/contacts",
        &token_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_and_filter_contacts_by_status(pool: PgPool) {
    let token = admin_token(&pool).await;
    let first = seed_contact(&pool, "First").await;
    seed_contact(&pool, "Second").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/submissions/contacts/{first}/status"),
        json!({ "status": "reviewed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "reviewed");

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/submissions/contacts",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/submissions/contacts?status=new",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Second");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_kind_and_status_are_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/submissions/newsletters",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/submissions/feedback?status=archived",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn disallowed_transition_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let booking = seed_booking(&pool, "10:00").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/submissions/bookings/{booking}/status"),
        json!({ "status": "cancelled" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Cancelled is terminal.
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/admin/submissions/bookings/{booking}/status"),
        json!({ "status": "confirmed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_confirmation_of_a_slot_conflicts(pool: PgPool) {
    let token = admin_token(&pool).await;
    let first = seed_booking(&pool, "11:00").await;
    let second = seed_booking(&pool, "11:00").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/submissions/bookings/{first}/status"),
        json!({ "status": "confirmed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/submissions/bookings/{second}/status"),
        json!({ "status": "confirmed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let still_pending = BookingRepo::find_by_id(&pool, second).await.unwrap().unwrap();
    assert_eq!(still_pending.status, "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn general_booking_blocks_ambassador_booking_in_its_slot(pool: PgPool) {
    let token = admin_token(&pool).await;
    let sarah = seed_ambassador(&pool, "Sarah").await;
    let general = seed_booking(&pool, "10:00").await;
    let with_sarah = seed_booking_with(&pool, "10:00", Some(sarah)).await;

    let response = set_booking_status(&pool, &token, general, "confirmed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = set_booking_status(&pool, &token, with_sarah, "confirmed").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ambassador_booking_blocks_general_booking_in_its_slot(pool: PgPool) {
    let token = admin_token(&pool).await;
    let sarah = seed_ambassador(&pool, "Sarah").await;
    let with_sarah = seed_booking_with(&pool, "10:00", Some(sarah)).await;
    let general = seed_booking(&pool, "10:00").await;

    let response = set_booking_status(&pool, &token, with_sarah, "confirmed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = set_booking_status(&pool, &token, general, "confirmed").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_ambassadors_with_confirmed_bookings_succeeds(pool: PgPool) {
    let token = admin_token(&pool).await;
    let sarah = seed_ambassador(&pool, "Sarah").await;
    let ali = seed_ambassador(&pool, "Ali").await;
    let with_sarah = seed_booking_with(&pool, "10:00", Some(sarah)).await;
    let with_ali = seed_booking_with(&pool, "10:00", Some(ali)).await;

    // Different ambassadors may hold the same slot.
    for id in [with_sarah, with_ali] {
        let response = set_booking_status(&pool, &token, id, "confirmed").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    for ambassador in [sarah, ali] {
        let response = delete_auth(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/admin/ambassadors/{ambassador}"),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    for id in [with_sarah, with_ali] {
        let booking = BookingRepo::find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(booking.status, "cancelled");
        assert!(booking.ambassador_id.is_none());
    }

    // The slot is open again for a general booking.
    let general = seed_booking(&pool, "10:00").await;
    let response = set_booking_status(&pool, &token, general, "confirmed").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_update_for_missing_submission_is_not_found(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/submissions/contacts/9999/status",
        json!({ "status": "reviewed" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_submission_then_not_found(pool: PgPool) {
    let token = admin_token(&pool).await;
    let contact = seed_contact(&pool, "Doomed").await;
    let uri = format!("/api/v1/admin/submissions/contacts/{contact}");

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(common::build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_delete_university(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/universities",
        json!({
            "name": "Habib University",
            "location": "Karachi",
            "type": "Private",
            "ranking": 12,
            "rating": 4.3,
            "programs": ["Computer Science", "Social Development"]
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["type"], "Private");

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/universities/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/universities/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(UniversityRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn university_with_bad_type_or_rating_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;

    for body in [
        json!({ "name": "X", "location": "Y", "type": "Semi-public", "ranking": 1 }),
        json!({ "name": "X", "location": "Y", "type": "Public", "ranking": 1, "rating": 5.5 }),
        json!({ "name": " ", "location": "Y", "type": "Public", "ranking": 1 }),
    ] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/universities",
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_ambassador_and_scholarship(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/ambassadors",
        json!({
            "name": "Sarah Ahmed",
            "university": "LUMS",
            "program": "Computer Science",
            "location": "Lahore",
            "rating": 4.9
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_available"], true);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/scholarships",
        json!({
            "title": "Chevening",
            "provider": "UK Government",
            "type": "Fully Funded",
            "deadline": "2027-11-05",
            "level": "Masters",
            "status": "maybe"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/scholarships",
        json!({
            "title": "Chevening",
            "provider": "UK Government",
            "type": "Fully Funded",
            "deadline": "2027-11-05",
            "level": "Masters"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "open");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn students_cannot_edit_the_catalog(pool: PgPool) {
    let student = create_user(&pool, "nosy@example.com", "student").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/universities",
        json!({ "name": "X", "location": "Y", "type": "Public", "ranking": 1 }),
        &token_for(&student),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/admin/universities",
        json!({ "name": "X", "location": "Y", "type": "Public", "ranking": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
