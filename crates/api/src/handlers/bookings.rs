//! Handlers for session bookings and the daily availability grid.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use unipath_core::booking::{
    daily_slots, format_slot_time, parse_slot_time, validate_booking_date, BookedSlot, TimeSlot,
};
use unipath_core::error::CoreError;
use unipath_core::forms::{validate_form, BookingForm};
use unipath_core::types::DbId;
use unipath_db::models::booking::{AvailabilityParams, Booking};
use unipath_db::repositories::{AmbassadorRepo, BookingRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalAuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Availability grid for one date.
#[derive(Debug, Serialize)]
pub struct Availability {
    pub date: NaiveDate,
    pub ambassador_id: Option<DbId>,
    pub slots: Vec<TimeSlot>,
}

async fn ensure_ambassador(state: &AppState, ambassador_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = ambassador_id {
        if AmbassadorRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Ambassador",
                id,
            }));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

/// Request a session. Open to visitors; a signed-in user's booking is linked
/// to their account.
///
/// The request is stored as `pending`. A slot already held by a confirmed
/// booking is refused with 409.
pub async fn create_booking(
    OptionalAuthUser(user): OptionalAuthUser,
    State(state): State<AppState>,
    Json(input): Json<BookingForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Booking>>)> {
    validate_form(&input)?;
    let time = parse_slot_time(&input.time)?;
    validate_booking_date(input.date, Utc::now().date_naive())?;
    ensure_ambassador(&state, input.ambassador_id).await?;

    let time = format_slot_time(time);
    if BookingRepo::is_slot_confirmed(&state.pool, input.date, &time, input.ambassador_id, None)
        .await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "The {time} slot on {} is already booked",
            input.date
        ))));
    }

    let user_id = user.map(|u| u.user_id);
    let booking = BookingRepo::create(&state.pool, user_id, &input, &time).await?;

    tracing::info!(
        booking_id = booking.id,
        user_id = ?user_id,
        date = %booking.booking_date,
        time = %booking.booking_time,
        "Booking requested",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

// ---------------------------------------------------------------------------
// GET /bookings/availability
// ---------------------------------------------------------------------------

/// Hourly slots for a date, optionally for one ambassador.
pub async fn get_availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<DataResponse<Availability>>> {
    ensure_ambassador(&state, params.ambassador_id).await?;

    let bookings = BookingRepo::list_for_date(&state.pool, params.date, params.ambassador_id).await?;
    let booked: Vec<BookedSlot> = bookings.iter().map(BookedSlot::from).collect();

    Ok(Json(DataResponse {
        data: Availability {
            date: params.date,
            ambassador_id: params.ambassador_id,
            slots: daily_slots(params.date, &booked),
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /bookings/mine
// ---------------------------------------------------------------------------

/// The signed-in user's bookings, in date and slot order.
pub async fn list_my_bookings(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Booking>>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}
