//! Repository for the `password_reset_tokens` table.

use sqlx::PgPool;
use unipath_core::types::{DbId, Timestamp};

use crate::models::password_reset::PasswordResetToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token_hash, expires_at, is_used, created_at, updated_at";

/// Provides operations for single-use password reset tokens.
pub struct PasswordResetRepo;

impl PasswordResetRepo {
    /// Store the hash of a newly issued reset token.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<PasswordResetToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO password_reset_tokens (user_id, token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordResetToken>(&query)
            .bind(user_id)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Atomically consume an unused, unexpired token.
    ///
    /// Returns the token row if it was valid; a second call with the same hash
    /// returns `None`.
    pub async fn consume(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, sqlx::Error> {
        let query = format!(
            "UPDATE password_reset_tokens SET is_used = true
             WHERE token_hash = $1
               AND is_used = false
               AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordResetToken>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Invalidate every outstanding token for a user.
    pub async fn invalidate_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE password_reset_tokens SET is_used = true
             WHERE user_id = $1 AND is_used = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete expired or spent tokens. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM password_reset_tokens WHERE expires_at < NOW() OR is_used = true",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
