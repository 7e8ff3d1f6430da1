#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use unipath_api::auth::jwt::{generate_access_token, JwtConfig};
use unipath_api::auth::observer::AuthStateObserver;
use unipath_api::auth::password::hash_password;
use unipath_api::config::ServerConfig;
use unipath_api::router::build_app_router;
use unipath_api::state::AppState;
use unipath_db::models::user::{CreateUser, User};
use unipath_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "test_password_123!";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Test `ServerConfig` with dev defaults and the given favorites root.
pub fn test_config(favorites_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        favorites_dir,
        password_min_length: 8,
        password_reset_expiry_mins: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the production router over `pool`.
///
/// Anonymous favorites go to a fresh directory under the system temp dir.
pub fn build_test_app(pool: PgPool) -> Router {
    let dir = std::env::temp_dir().join(format!("unipath-test-{}", uuid::Uuid::new_v4()));
    build_test_app_with_favorites(pool, &dir)
}

pub fn build_test_app_with_favorites(pool: PgPool, favorites_dir: &Path) -> Router {
    build_test_app_with_observer(pool, favorites_dir, Arc::new(AuthStateObserver::default()))
}

pub fn build_test_app_with_observer(
    pool: PgPool,
    favorites_dir: &Path,
    auth_observer: Arc<AuthStateObserver>,
) -> Router {
    let config = test_config(favorites_dir.to_path_buf());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        auth_observer,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] and the given role.
pub async fn create_user(pool: &PgPool, email: &str, role: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        full_name: "Test User".to_string(),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// An access token for `user`, signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_jwt_config()).expect("token generation")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send one request through the router.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, &[], None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let bearer = format!("Bearer {token}");
    send(app, Method::GET, uri, &[("authorization", &bearer)], None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, &[], Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let bearer = format!("Bearer {token}");
    send(app, Method::POST, uri, &[("authorization", &bearer)], Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let bearer = format!("Bearer {token}");
    send(app, Method::PUT, uri, &[("authorization", &bearer)], Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let bearer = format!("Bearer {token}");
    send(app, Method::DELETE, uri, &[("authorization", &bearer)], None).await
}

/// Collect a response body as JSON. An empty body reads as `null`.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
