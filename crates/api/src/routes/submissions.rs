//! Route definitions for visitor form submissions.

use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Form submission routes, merged at the `/api/v1` root.
///
/// ```text
/// POST /contacts                 -> submit_contact
/// POST /feedback                 -> submit_feedback
/// POST /ambassador-applications  -> submit_ambassador_application (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contacts", post(submissions::submit_contact))
        .route("/feedback", post(submissions::submit_feedback))
        .route(
            "/ambassador-applications",
            post(submissions::submit_ambassador_application),
        )
}
