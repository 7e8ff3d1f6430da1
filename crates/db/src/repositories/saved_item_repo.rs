//! Repository for the `saved_items` table.
//!
//! Rows are keyed by `(user_id, kind, entity_id)`; insert and delete are both
//! idempotent.

use sqlx::PgPool;
use unipath_core::favorites::FavoriteKind;
use unipath_core::types::DbId;

use crate::models::saved_item::SavedItem;

/// Provides keyed save/unsave operations for remote favorites.
pub struct SavedItemRepo;

impl SavedItemRepo {
    /// Save an entity. Returns `true` if a new row was written.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        kind: FavoriteKind,
        entity_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO saved_items (user_id, kind, entity_id)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, kind, entity_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(entity_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unsave an entity. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        kind: FavoriteKind,
        entity_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM saved_items WHERE user_id = $1 AND kind = $2 AND entity_id = $3",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(entity_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `true` if the user has saved this entity.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        kind: FavoriteKind,
        entity_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM saved_items
                WHERE user_id = $1 AND kind = $2 AND entity_id = $3
             )",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(entity_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// All saved rows of one kind for a user, oldest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        kind: FavoriteKind,
    ) -> Result<Vec<SavedItem>, sqlx::Error> {
        sqlx::query_as::<_, SavedItem>(
            "SELECT user_id, kind, entity_id, created_at, updated_at
             FROM saved_items
             WHERE user_id = $1 AND kind = $2
             ORDER BY created_at, entity_id",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_all(pool)
        .await
    }

    /// Delete a user's saved rows whose entity no longer exists.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_dangling(
        pool: &PgPool,
        user_id: DbId,
        kind: FavoriteKind,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "DELETE FROM saved_items s
             WHERE s.user_id = $1
               AND s.kind = $2
               AND NOT EXISTS (SELECT 1 FROM {} e WHERE e.id = s.entity_id)",
            entity_table(kind)
        );
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(kind.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn entity_table(kind: FavoriteKind) -> &'static str {
    match kind {
        FavoriteKind::Ambassador => "ambassadors",
        FavoriteKind::University => "universities",
    }
}
