//! Feedback model.

use serde::Serialize;
use sqlx::FromRow;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: i32,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
