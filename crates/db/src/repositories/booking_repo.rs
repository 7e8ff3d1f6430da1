//! Repository for the `bookings` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use unipath_core::booking::STATUS_CONFIRMED;
use unipath_core::forms::{normalize_email, BookingForm};
use unipath_core::submissions::SubmissionKind;
use unipath_core::types::DbId;

use crate::models::booking::Booking;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, ambassador_id, name, email, phone, booking_date, \
                       booking_time, topic, message, status, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Store a validated booking request with status `pending`.
    ///
    /// `time` is the canonical `HH:MM` slot start; the raw form value is not
    /// stored.
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        input: &BookingForm,
        time: &str,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (user_id, ambassador_id, name, email, phone, booking_date, booking_time,
                 topic, message, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .bind(input.ambassador_id)
            .bind(input.name.trim())
            .bind(normalize_email(&input.email))
            .bind(&input.phone)
            .bind(input.date)
            .bind(time)
            .bind(&input.topic)
            .bind(&input.message)
            .bind(SubmissionKind::Booking.initial_status())
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All bookings on `date`. With an ambassador, that ambassador's bookings
    /// plus the general ones (no ambassador), which hold the slot for everyone.
    pub async fn list_for_date(
        pool: &PgPool,
        date: NaiveDate,
        ambassador_id: Option<DbId>,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE booking_date = $1
               AND ($2::BIGINT IS NULL OR ambassador_id IS NULL OR ambassador_id = $2)
             ORDER BY booking_time, id"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(date)
            .bind(ambassador_id)
            .fetch_all(pool)
            .await
    }

    /// Bookings made by one user, soonest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE user_id = $1
             ORDER BY booking_date, booking_time, id"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// `true` if a confirmed booking other than `exclude_id` occupies the slot.
    ///
    /// A general booking (no ambassador) conflicts with every booking in the
    /// slot; two ambassador bookings conflict only for the same ambassador.
    pub async fn is_slot_confirmed(
        pool: &PgPool,
        date: NaiveDate,
        time: &str,
        ambassador_id: Option<DbId>,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let taken: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM bookings
                WHERE booking_date = $1
                  AND booking_time = $2
                  AND status = $3
                  AND ($4::BIGINT IS NULL OR ambassador_id IS NULL OR ambassador_id = $4)
                  AND ($5::BIGINT IS NULL OR id <> $5)
             )",
        )
        .bind(date)
        .bind(time)
        .bind(STATUS_CONFIRMED)
        .bind(ambassador_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(taken.0)
    }

    /// List bookings with optional filters for status and user, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        user_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM bookings {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Booking>(&query);

        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(uid) = user_id {
            q = q.bind(uid);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Update the status of a booking. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("UPDATE bookings SET status = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Booking>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
