//! Session booking model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipath_core::booking::BookedSlot;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub ambassador_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "date")]
    pub booking_date: NaiveDate,
    /// Slot start time, `HH:MM`.
    #[serde(rename = "time")]
    pub booking_time: String,
    pub topic: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Booking> for BookedSlot {
    fn from(b: &Booking) -> Self {
        BookedSlot {
            date: b.booking_date,
            time: b.booking_time.clone(),
            status: b.status.clone(),
        }
    }
}

/// Query parameters for `GET /bookings/availability`.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub date: NaiveDate,
    pub ambassador_id: Option<DbId>,
}
