//! Remote favorites strategy for authenticated users.

use async_trait::async_trait;
use sqlx::PgPool;
use unipath_core::error::CoreError;
use unipath_core::favorites::{FavoriteKind, FavoriteStore};
use unipath_core::types::DbId;

use crate::repositories::SavedItemRepo;

/// [`FavoriteStore`] backed by the `saved_items` table for one user.
///
/// Every write is a single keyed statement, so there is no optimistic local
/// state to roll back: a failed call leaves the set as it was.
#[derive(Clone)]
pub struct RemoteFavoriteStore {
    pool: PgPool,
    user_id: DbId,
}

impl RemoteFavoriteStore {
    pub fn new(pool: PgPool, user_id: DbId) -> Self {
        Self { pool, user_id }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Saved items query failed: {err}"))
}

#[async_trait]
impl FavoriteStore for RemoteFavoriteStore {
    async fn list(&self, kind: FavoriteKind) -> Result<Vec<DbId>, CoreError> {
        let removed = SavedItemRepo::delete_dangling(&self.pool, self.user_id, kind)
            .await
            .map_err(storage_error)?;
        if removed > 0 {
            tracing::debug!(
                user_id = self.user_id,
                kind = kind.as_str(),
                removed,
                "Removed saved items pointing at deleted entities",
            );
        }

        let rows = SavedItemRepo::list_for_user(&self.pool, self.user_id, kind)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(|row| row.entity_id).collect())
    }

    async fn add(&self, kind: FavoriteKind, id: DbId) -> Result<(), CoreError> {
        SavedItemRepo::insert(&self.pool, self.user_id, kind, id)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn remove(&self, kind: FavoriteKind, id: DbId) -> Result<(), CoreError> {
        SavedItemRepo::delete(&self.pool, self.user_id, kind, id)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn contains(&self, kind: FavoriteKind, id: DbId) -> Result<bool, CoreError> {
        SavedItemRepo::exists(&self.pool, self.user_id, kind, id)
            .await
            .map_err(storage_error)
    }
}
