//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /submissions/{kind}              -> list_submissions
/// PUT    /submissions/{kind}/{id}/status  -> update_submission_status
/// DELETE /submissions/{kind}/{id}         -> delete_submission
/// POST   /universities                    -> create_university
/// DELETE /universities/{id}               -> delete_university
/// POST   /ambassadors                     -> create_ambassador
/// DELETE /ambassadors/{id}                -> delete_ambassador
/// POST   /scholarships                    -> create_scholarship
/// DELETE /scholarships/{id}               -> delete_scholarship
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions/{kind}", get(admin::list_submissions))
        .route(
            "/submissions/{kind}/{id}/status",
            put(admin::update_submission_status),
        )
        .route(
            "/submissions/{kind}/{id}",
            delete(admin::delete_submission),
        )
        .route("/universities", post(admin::create_university))
        .route("/universities/{id}", delete(admin::delete_university))
        .route("/ambassadors", post(admin::create_ambassador))
        .route("/ambassadors/{id}", delete(admin::delete_ambassador))
        .route("/scholarships", post(admin::create_scholarship))
        .route("/scholarships/{id}", delete(admin::delete_scholarship))
}
