//! Booking statuses and daily time-slot availability.
//!
//! Sessions are booked on a fixed hourly grid. A slot is unavailable when a
//! confirmed booking on that date starts at the slot's time; pending and
//! cancelled bookings never block a slot.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status of a submitted booking.
pub const STATUS_PENDING: &str = "pending";
/// Booking accepted by an administrator; occupies its slot.
pub const STATUS_CONFIRMED: &str = "confirmed";
/// Booking withdrawn or declined.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid booking statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_CONFIRMED, STATUS_CANCELLED];

/// Returns the set of statuses that `from_status` may transition to.
///
/// - `pending`   -> `confirmed`, `cancelled`
/// - `confirmed` -> `cancelled`
/// - `cancelled` is terminal
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_CONFIRMED, STATUS_CANCELLED],
        STATUS_CONFIRMED => &[STATUS_CANCELLED],
        _ => &[],
    }
}

/// Validate that a booking status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition booking from '{current}' to '{next}'. Allowed transitions: {allowed:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Time slots
// ---------------------------------------------------------------------------

/// First bookable hour (09:00).
pub const FIRST_SLOT_HOUR: u32 = 9;

/// Hour at which the last slot ends (17:00).
pub const CLOSING_HOUR: u32 = 17;

/// Wire format of slot times.
pub const SLOT_TIME_FORMAT: &str = "%H:%M";

/// One hourly slot on the booking grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// Start time, `HH:MM`.
    pub time: String,
    pub available: bool,
}

/// A booking as seen by the availability check.
#[derive(Debug, Clone)]
pub struct BookedSlot {
    pub date: NaiveDate,
    /// Start time as stored, `HH:MM`.
    pub time: String,
    pub status: String,
}

/// Start times of every slot in the daily grid.
pub fn slot_start_times() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..CLOSING_HOUR)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// Parse and check a requested start time against the grid.
pub fn parse_slot_time(raw: &str) -> Result<NaiveTime, CoreError> {
    let time = NaiveTime::parse_from_str(raw.trim(), SLOT_TIME_FORMAT).map_err(|_| {
        CoreError::Validation(format!("Invalid time '{raw}'. Expected HH:MM"))
    })?;
    if slot_start_times().contains(&time) {
        Ok(time)
    } else {
        Err(CoreError::Validation(format!(
            "Time '{raw}' is not a bookable slot. Slots start on the hour from \
             {FIRST_SLOT_HOUR:02}:00 to {:02}:00",
            CLOSING_HOUR - 1
        )))
    }
}

/// Format a slot start time as `HH:MM`.
pub fn format_slot_time(time: NaiveTime) -> String {
    time.format(SLOT_TIME_FORMAT).to_string()
}

/// `true` if a confirmed booking on `date` starts at `time`.
pub fn is_slot_taken(date: NaiveDate, time: NaiveTime, bookings: &[BookedSlot]) -> bool {
    bookings.iter().any(|b| {
        b.date == date
            && b.status == STATUS_CONFIRMED
            && NaiveTime::parse_from_str(b.time.trim(), SLOT_TIME_FORMAT).ok() == Some(time)
    })
}

/// Compute the daily grid for `date`, marking slots occupied by confirmed
/// bookings as unavailable. Bookings for other dates are ignored.
pub fn daily_slots(date: NaiveDate, bookings: &[BookedSlot]) -> Vec<TimeSlot> {
    slot_start_times()
        .into_iter()
        .map(|time| TimeSlot {
            time: format_slot_time(time),
            available: !is_slot_taken(date, time, bookings),
        })
        .collect()
}

/// Reject booking dates before `today`.
pub fn validate_booking_date(date: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if date < today {
        return Err(CoreError::Validation(format!(
            "Booking date {date} is in the past"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
