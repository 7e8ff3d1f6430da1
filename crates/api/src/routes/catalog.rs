//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/universities`.
///
/// ```text
/// GET /       -> list_universities
/// GET /{id}   -> get_university
/// ```
pub fn universities_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_universities))
        .route("/{id}", get(catalog::get_university))
}

/// Routes mounted at `/ambassadors`.
///
/// ```text
/// GET /       -> list_ambassadors
/// GET /{id}   -> get_ambassador
/// ```
pub fn ambassadors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_ambassadors))
        .route("/{id}", get(catalog::get_ambassador))
}

/// Routes mounted at `/scholarships`.
///
/// ```text
/// GET /       -> list_scholarships
/// GET /{id}   -> get_scholarship
/// ```
pub fn scholarships_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_scholarships))
        .route("/{id}", get(catalog::get_scholarship))
}
