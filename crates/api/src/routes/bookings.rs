//! Route definitions for the `/bookings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST /               -> create_booking (auth optional)
/// GET  /availability   -> get_availability
/// GET  /mine           -> list_my_bookings (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(bookings::create_booking))
        .route("/availability", get(bookings::get_availability))
        .route("/mine", get(bookings::list_my_bookings))
}
