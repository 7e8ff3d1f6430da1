//! Remote favorite rows.

use serde::Serialize;
use sqlx::FromRow;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `saved_items` table, keyed by `(user_id, kind, entity_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavedItem {
    pub user_id: DbId,
    /// `ambassador` or `university`.
    pub kind: String,
    pub entity_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
