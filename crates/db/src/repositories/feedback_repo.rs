//! Repository for the `feedback` table.

use sqlx::PgPool;
use unipath_core::forms::{normalize_email, FeedbackForm};
use unipath_core::submissions::SubmissionKind;
use unipath_core::types::DbId;

use crate::models::feedback::Feedback;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, rating, message, status, created_at, updated_at";

/// Provides CRUD operations for feedback entries.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Store a validated feedback form with status `new`.
    pub async fn create(pool: &PgPool, input: &FeedbackForm) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (name, email, rating, message, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.name)
            .bind(input.email.as_deref().map(normalize_email))
            .bind(input.rating)
            .bind(&input.message)
            .bind(SubmissionKind::Feedback.initial_status())
            .fetch_one(pool)
            .await
    }

    /// Find a feedback entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List feedback, optionally filtered by status, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update the status of a feedback entry. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("UPDATE feedback SET status = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feedback entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
