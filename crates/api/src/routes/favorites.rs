//! Route definitions for the `/favorites` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// `{kind}` is `ambassadors` or `universities`. Requests carry either a
/// Bearer token or an `X-Client-Id` header.
///
/// ```text
/// GET    /{kind}              -> list_favorites
/// PUT    /{kind}/{id}         -> add_favorite
/// DELETE /{kind}/{id}         -> remove_favorite
/// POST   /{kind}/{id}/toggle  -> toggle_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}", get(favorites::list_favorites))
        .route(
            "/{kind}/{id}",
            put(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .route("/{kind}/{id}/toggle", post(favorites::toggle_favorite))
}
