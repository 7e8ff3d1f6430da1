//! Favorite / saved-item state.
//!
//! One [`FavoriteStore`] interface with two interchangeable strategies:
//!
//! - [`local::LocalFavoriteStore`] keeps a JSON array of ids in a key-value
//!   storage owned by one client (the anonymous path).
//! - The remote strategy lives in the `db` crate and keys one row per
//!   `(user, kind, entity)` so save/unsave are idempotent.
//!
//! Callers pick the strategy from the session: authenticated users get the
//! remote store, everyone else the local one.

pub mod local;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

/// Storage key for favorite ambassadors in a client's local storage.
pub const FAVORITE_AMBASSADORS_KEY: &str = "favoriteAmbassadors";

/// Storage key for saved universities in a client's local storage.
pub const SAVED_UNIVERSITIES_KEY: &str = "savedUniversities";

/// What kind of entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Ambassador,
    University,
}

impl FavoriteKind {
    /// Fixed local-storage key for this kind.
    pub fn storage_key(self) -> &'static str {
        match self {
            FavoriteKind::Ambassador => FAVORITE_AMBASSADORS_KEY,
            FavoriteKind::University => SAVED_UNIVERSITIES_KEY,
        }
    }

    /// Value stored in the `saved_items.kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteKind::Ambassador => "ambassador",
            FavoriteKind::University => "university",
        }
    }

    /// Parse the plural URL segment (`ambassadors`, `universities`).
    pub fn from_path(segment: &str) -> Result<Self, CoreError> {
        match segment {
            "ambassadors" => Ok(FavoriteKind::Ambassador),
            "universities" => Ok(FavoriteKind::University),
            other => Err(CoreError::Validation(format!(
                "Invalid favorite kind '{other}'. Must be one of: ambassadors, universities"
            ))),
        }
    }
}

/// A set of favorite entity ids per kind, owned by one client or user.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// All favorite ids of this kind, in insertion order.
    async fn list(&self, kind: FavoriteKind) -> Result<Vec<DbId>, CoreError>;

    /// Mark `id` as a favorite. Adding an existing favorite is a no-op.
    async fn add(&self, kind: FavoriteKind, id: DbId) -> Result<(), CoreError>;

    /// Unmark `id`. Removing an absent favorite is a no-op.
    async fn remove(&self, kind: FavoriteKind, id: DbId) -> Result<(), CoreError>;

    async fn contains(&self, kind: FavoriteKind, id: DbId) -> Result<bool, CoreError> {
        Ok(self.list(kind).await?.contains(&id))
    }

    /// Flip membership of `id` and return the new state.
    async fn toggle(&self, kind: FavoriteKind, id: DbId) -> Result<bool, CoreError> {
        if self.contains(kind, id).await? {
            self.remove(kind, id).await?;
            Ok(false)
        } else {
            self.add(kind, id).await?;
            Ok(true)
        }
    }
}
