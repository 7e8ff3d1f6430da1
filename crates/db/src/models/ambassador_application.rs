//! Ambassador application model.

use serde::Serialize;
use sqlx::FromRow;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `ambassador_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AmbassadorApplication {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: String,
    pub email: String,
    pub university: String,
    pub program: String,
    pub year_of_study: i32,
    pub motivation: String,
    pub linkedin_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
