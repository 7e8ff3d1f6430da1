//! Repository for the `universities` table.

use sqlx::types::Json;
use sqlx::PgPool;
use unipath_core::types::DbId;

use crate::models::university::{CreateUniversity, University};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, university_type, ranking, tuition, acceptance_rate, \
                       rating, programs, facilities, admission_requirements, program_details, \
                       created_at, updated_at";

/// Provides CRUD operations for universities.
pub struct UniversityRepo;

impl UniversityRepo {
    /// Insert a new university, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUniversity) -> Result<University, sqlx::Error> {
        let query = format!(
            "INSERT INTO universities
                (name, location, university_type, ranking, tuition, acceptance_rate, rating,
                 programs, facilities, admission_requirements, program_details)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, University>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.university_type)
            .bind(input.ranking)
            .bind(&input.tuition)
            .bind(&input.acceptance_rate)
            .bind(input.rating)
            .bind(&input.programs)
            .bind(&input.facilities)
            .bind(&input.admission_requirements)
            .bind(Json(&input.program_details))
            .fetch_one(pool)
            .await
    }

    /// Find a university by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities WHERE id = $1");
        sqlx::query_as::<_, University>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of universities in insertion order.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, University>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a university. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM universities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
