//! Integration tests for the health endpoint and the shared middleware stack.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36, "x-request-id should be a UUID");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn responses_are_gzipped_when_accepted(pool: PgPool) {
    let response = send(
        common::build_test_app(pool.clone()),
        Method::GET,
        "/health",
        &[("accept-encoding", "gzip")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-encoding"], "gzip");

    // Plain JSON otherwise.
    let response = get(common::build_test_app(pool), "/health").await;
    assert!(response.headers().get("content-encoding").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_client_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send(
        app,
        Method::OPTIONS,
        "/api/v1/favorites/universities",
        &[
            ("origin", "http://localhost:5173"),
            ("access-control-request-method", "GET"),
            ("access-control-request-headers", "x-client-id"),
        ],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_headers = headers
        .get("access-control-allow-headers")
        .expect("Missing Access-Control-Allow-Headers header")
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allow_headers.contains("x-client-id"), "got: {allow_headers}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn errors_use_json_error_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/universities/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("University"));
}
