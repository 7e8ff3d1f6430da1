//! Local-only favorites persisted as JSON arrays in a key-value storage.
//!
//! Mirrors browser local storage: one string value per fixed key, holding a
//! JSON array of string ids. Nothing here talks to the database, so favorites
//! saved this way are lost when the storage is cleared and are not shared
//! across clients.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{FavoriteKind, FavoriteStore};
use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a client id used to scope local storage.
pub const MAX_CLIENT_ID_LENGTH: usize = 64;

/// String key-value storage, the shape of browser `localStorage`.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

// ---------------------------------------------------------------------------
// Storage backends
// ---------------------------------------------------------------------------

/// Process-local storage. Used by tests and as a throwaway store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Internal("memory storage lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Internal("memory storage lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a directory: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage scoped to one client under `root`.
    ///
    /// The client id becomes a directory name, so it is validated first.
    pub fn for_client(root: &Path, client_id: &str) -> Result<Self, CoreError> {
        validate_client_id(client_id)?;
        Ok(Self::new(root.join(client_id)))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Internal(format!(
                "Failed to read local storage key '{key}': {e}"
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            CoreError::Internal(format!("Failed to create local storage directory: {e}"))
        })?;

        // Write-then-rename so a reader never sees a half-written array. Each
        // write gets its own temp file; concurrent writers are last-write-wins.
        let target = self.path_for(key);
        let tmp = self
            .dir
            .join(format!("{key}.json.{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&tmp, value).await.map_err(|e| {
            CoreError::Internal(format!("Failed to write local storage key '{key}': {e}"))
        })?;
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(CoreError::Internal(format!(
                "Failed to write local storage key '{key}': {e}"
            )));
        }
        Ok(())
    }
}

/// Client ids must be 1-64 characters of `[A-Za-z0-9_-]`.
pub fn validate_client_id(client_id: &str) -> Result<(), CoreError> {
    let well_formed = !client_id.is_empty()
        && client_id.len() <= MAX_CLIENT_ID_LENGTH
        && client_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Client id must be 1-{MAX_CLIENT_ID_LENGTH} characters of letters, digits, '-' or '_'"
        )))
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// [`FavoriteStore`] over a [`KeyValueStorage`].
pub struct LocalFavoriteStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> LocalFavoriteStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn load(&self, kind: FavoriteKind) -> Result<Vec<DbId>, CoreError> {
        let raw = self.storage.get(kind.storage_key()).await?;
        Ok(raw.as_deref().map(decode_ids).unwrap_or_default())
    }

    async fn save(&self, kind: FavoriteKind, ids: &[DbId]) -> Result<(), CoreError> {
        self.storage
            .set(kind.storage_key(), &encode_ids(ids))
            .await
    }
}

#[async_trait]
impl<S: KeyValueStorage> FavoriteStore for LocalFavoriteStore<S> {
    async fn list(&self, kind: FavoriteKind) -> Result<Vec<DbId>, CoreError> {
        self.load(kind).await
    }

    async fn add(&self, kind: FavoriteKind, id: DbId) -> Result<(), CoreError> {
        let mut ids = self.load(kind).await?;
        if !ids.contains(&id) {
            ids.push(id);
            self.save(kind, &ids).await?;
        }
        Ok(())
    }

    async fn remove(&self, kind: FavoriteKind, id: DbId) -> Result<(), CoreError> {
        let mut ids = self.load(kind).await?;
        let before = ids.len();
        ids.retain(|existing| *existing != id);
        if ids.len() != before {
            self.save(kind, &ids).await?;
        }
        Ok(())
    }
}

/// Decode a stored JSON array. Accepts string or numeric ids; anything that
/// is not an integer id is skipped, and an unparseable document is empty.
pub fn decode_ids(raw: &str) -> Vec<DbId> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unparseable local favorites");
            return Vec::new();
        }
    };

    let mut ids: Vec<DbId> = Vec::with_capacity(values.len());
    for value in values {
        let id = match value {
            serde_json::Value::String(s) => s.trim().parse().ok(),
            serde_json::Value::Number(n) => n.as_i64(),
            _ => None,
        };
        if let Some(id) = id {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Encode ids as a JSON array of strings.
pub fn encode_ids(ids: &[DbId]) -> String {
    let strings: Vec<String> = ids.iter().map(ToString::to_string).collect();
    serde_json::Value::from(strings).to_string()
}
