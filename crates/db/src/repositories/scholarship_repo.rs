//! Repository for the `scholarships` table.

use sqlx::PgPool;
use unipath_core::listing::scholarships::STATUS_OPEN;
use unipath_core::types::DbId;

use crate::models::scholarship::{CreateScholarship, Scholarship};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, provider, scholarship_type, amount, deadline, eligibility, \
                       level, fields, description, requirements, selection_criteria, status, \
                       created_at, updated_at";

/// Provides CRUD operations for scholarships.
pub struct ScholarshipRepo;

impl ScholarshipRepo {
    /// Insert a new scholarship, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateScholarship,
    ) -> Result<Scholarship, sqlx::Error> {
        let query = format!(
            "INSERT INTO scholarships
                (title, provider, scholarship_type, amount, deadline, eligibility, level,
                 fields, description, requirements, selection_criteria, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scholarship>(&query)
            .bind(&input.title)
            .bind(&input.provider)
            .bind(&input.scholarship_type)
            .bind(&input.amount)
            .bind(input.deadline)
            .bind(&input.eligibility)
            .bind(&input.level)
            .bind(&input.fields)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(&input.selection_criteria)
            .bind(input.status.as_deref().unwrap_or(STATUS_OPEN))
            .fetch_one(pool)
            .await
    }

    /// Find a scholarship by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scholarship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scholarships WHERE id = $1");
        sqlx::query_as::<_, Scholarship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of scholarships in insertion order.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Scholarship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scholarships ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Scholarship>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a scholarship. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scholarships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
