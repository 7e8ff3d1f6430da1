//! Repository for the `ambassadors` table.

use sqlx::PgPool;
use unipath_core::booking::{STATUS_CANCELLED, STATUS_CONFIRMED};
use unipath_core::types::DbId;

use crate::models::ambassador::{Ambassador, CreateAmbassador};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, university, program, location, rating, review_count, \
                       students_helped, specialties, is_available, bio, image_url, \
                       created_at, updated_at";

/// Provides CRUD operations for ambassadors.
pub struct AmbassadorRepo;

impl AmbassadorRepo {
    /// Insert a new ambassador, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAmbassador) -> Result<Ambassador, sqlx::Error> {
        let query = format!(
            "INSERT INTO ambassadors
                (name, university, program, location, rating, review_count, students_helped,
                 specialties, is_available, bio, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, true), $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ambassador>(&query)
            .bind(&input.name)
            .bind(&input.university)
            .bind(&input.program)
            .bind(&input.location)
            .bind(input.rating)
            .bind(input.review_count)
            .bind(input.students_helped)
            .bind(&input.specialties)
            .bind(input.is_available)
            .bind(&input.bio)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an ambassador by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ambassador>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ambassadors WHERE id = $1");
        sqlx::query_as::<_, Ambassador>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of ambassadors in insertion order.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Ambassador>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ambassadors ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Ambassador>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete an ambassador. Bookings keep their row with `ambassador_id`
    /// cleared; confirmed ones are cancelled first since the session can no
    /// longer take place.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let cancelled = sqlx::query(
            "UPDATE bookings SET status = $1
             WHERE ambassador_id = $2 AND status = $3",
        )
        .bind(STATUS_CANCELLED)
        .bind(id)
        .bind(STATUS_CONFIRMED)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM ambassadors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if cancelled.rows_affected() > 0 {
            tracing::info!(
                ambassador_id = id,
                cancelled = cancelled.rows_affected(),
                "Cancelled confirmed bookings of removed ambassador",
            );
        }
        Ok(result.rows_affected() > 0)
    }
}
