//! Password reset token model.

use sqlx::FromRow;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `password_reset_tokens` table. Only the token hash is kept.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_used: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
