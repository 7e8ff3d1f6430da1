//! Repository for the `contacts` table.

use sqlx::PgPool;
use unipath_core::forms::{normalize_email, ContactForm};
use unipath_core::submissions::SubmissionKind;
use unipath_core::types::DbId;

use crate::models::contact::Contact;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, subject, message, status, created_at, updated_at";

/// Provides CRUD operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a validated contact form with status `new`.
    pub async fn create(pool: &PgPool, input: &ContactForm) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, subject, message, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(input.name.trim())
            .bind(normalize_email(&input.email))
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(SubmissionKind::Contact.initial_status())
            .fetch_one(pool)
            .await
    }

    /// Find a contact message by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contact messages, optionally filtered by status, newest first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update the status of a contact message. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("UPDATE contacts SET status = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Contact>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact message. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
