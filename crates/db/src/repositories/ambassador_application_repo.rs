//! Repository for the `ambassador_applications` table.

use sqlx::PgPool;
use unipath_core::forms::{normalize_email, AmbassadorApplicationForm};
use unipath_core::submissions::SubmissionKind;
use unipath_core::types::DbId;

use crate::models::ambassador_application::AmbassadorApplication;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, full_name, email, university, program, year_of_study, \
                       motivation, linkedin_url, status, created_at, updated_at";

/// Provides CRUD operations for ambassador applications.
pub struct AmbassadorApplicationRepo;

impl AmbassadorApplicationRepo {
    /// Store a validated application from `user_id` with status `pending`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &AmbassadorApplicationForm,
    ) -> Result<AmbassadorApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO ambassador_applications
                (user_id, full_name, email, university, program, year_of_study,
                 motivation, linkedin_url, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AmbassadorApplication>(&query)
            .bind(user_id)
            .bind(input.full_name.trim())
            .bind(normalize_email(&input.email))
            .bind(&input.university)
            .bind(&input.program)
            .bind(input.year_of_study)
            .bind(&input.motivation)
            .bind(&input.linkedin_url)
            .bind(SubmissionKind::AmbassadorApplication.initial_status())
            .fetch_one(pool)
            .await
    }

    /// Find an application by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AmbassadorApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ambassador_applications WHERE id = $1");
        sqlx::query_as::<_, AmbassadorApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List applications, optionally filtered by status, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AmbassadorApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ambassador_applications
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, AmbassadorApplication>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update the status of an application. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<AmbassadorApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE ambassador_applications SET status = $1 WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AmbassadorApplication>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ambassador_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
