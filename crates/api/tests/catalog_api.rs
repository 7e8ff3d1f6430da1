//! HTTP-level tests for the public university, ambassador and scholarship
//! listings.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_json, get};
use sqlx::PgPool;
use unipath_db::models::ambassador::{Ambassador, CreateAmbassador};
use unipath_db::models::scholarship::CreateScholarship;
use unipath_db::models::university::{CreateUniversity, University};
use unipath_db::repositories::{AmbassadorRepo, ScholarshipRepo, UniversityRepo};

async fn seed_ambassador(
    pool: &PgPool,
    name: &str,
    university: &str,
    rating: f64,
    students_helped: i32,
) -> Ambassador {
    AmbassadorRepo::create(
        pool,
        &CreateAmbassador {
            name: name.to_string(),
            university: university.to_string(),
            program: "Computer Science".to_string(),
            location: "Lahore".to_string(),
            rating,
            review_count: 10,
            students_helped,
            specialties: vec!["Admissions".to_string()],
            is_available: Some(true),
            bio: String::new(),
            image_url: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_university(pool: &PgPool, name: &str, kind: &str, ranking: i32) -> University {
    UniversityRepo::create(
        pool,
        &CreateUniversity {
            name: name.to_string(),
            location: "Islamabad".to_string(),
            university_type: kind.to_string(),
            ranking,
            tuition: "PKR 300,000".to_string(),
            acceptance_rate: "20%".to_string(),
            rating: 4.5,
            programs: vec!["Engineering".to_string()],
            facilities: vec![],
            admission_requirements: vec![],
            program_details: vec![],
        },
    )
    .await
    .unwrap()
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Ambassadors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn ambassadors_sort_by_rating_descending(pool: PgPool) {
    seed_ambassador(&pool, "Ali", "NUST", 4.8, 120).await;
    seed_ambassador(&pool, "Sarah", "LUMS", 4.9, 80).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/ambassadors?sort=rating",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await), ["Sarah", "Ali"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ambassadors_rating_floor_is_inclusive_filter(pool: PgPool) {
    seed_ambassador(&pool, "Ali", "NUST", 4.8, 120).await;
    seed_ambassador(&pool, "Sarah", "LUMS", 4.9, 80).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/ambassadors?rating_min=4.85",
    )
    .await;

    assert_eq!(names(&body_json(response).await), ["Sarah"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ambassador_search_ignores_case(pool: PgPool) {
    seed_ambassador(&pool, "Ali", "NUST", 4.8, 120).await;
    seed_ambassador(&pool, "Sarah", "LUMS", 4.9, 80).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/ambassadors?search=lums",
    )
    .await;

    assert_eq!(names(&body_json(response).await), ["Sarah"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ambassadors_sort_by_experience(pool: PgPool) {
    seed_ambassador(&pool, "Ali", "NUST", 4.8, 120).await;
    seed_ambassador(&pool, "Sarah", "LUMS", 4.9, 80).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/ambassadors?sort=experience&university=all",
    )
    .await;

    assert_eq!(names(&body_json(response).await), ["Ali", "Sarah"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_sort_key_is_rejected(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/ambassadors?sort=age",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ambassador_by_id(pool: PgPool) {
    let sarah = seed_ambassador(&pool, "Sarah", "LUMS", 4.9, 80).await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/ambassadors/{}", sarah.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Sarah");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/ambassadors/{}", sarah.id + 1000),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Universities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn universities_filter_by_type_and_sort_by_ranking(pool: PgPool) {
    seed_university(&pool, "FAST", "Private", 7).await;
    seed_university(&pool, "QAU", "Public", 3).await;
    seed_university(&pool, "LUMS", "Private", 1).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/universities?type=private&sort=ranking",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(names(&json), ["LUMS", "FAST"]);
    assert_eq!(json["data"][0]["type"], "Private");
}

// ---------------------------------------------------------------------------
// Scholarships
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn scholarships_sort_by_deadline_and_filter_status(pool: PgPool) {
    for (title, deadline, status) in [
        ("Chevening", "2027-03-01", "open"),
        ("Fulbright", "2027-01-15", "open"),
        ("Erasmus", "2026-12-01", "closed"),
    ] {
        ScholarshipRepo::create(
            &pool,
            &CreateScholarship {
                title: title.to_string(),
                provider: "Provider".to_string(),
                scholarship_type: "Fully Funded".to_string(),
                amount: "Full tuition".to_string(),
                deadline: NaiveDate::parse_from_str(deadline, "%Y-%m-%d").unwrap(),
                eligibility: String::new(),
                level: "Masters".to_string(),
                fields: vec!["Engineering".to_string()],
                description: String::new(),
                requirements: vec![],
                selection_criteria: vec![],
                status: Some(status.to_string()),
            },
        )
        .await
        .unwrap();
    }

    let response = get(
        common::build_test_app(pool),
        "/api/v1/scholarships?status=open&sort=deadline",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Fulbright", "Chevening"]);
}
