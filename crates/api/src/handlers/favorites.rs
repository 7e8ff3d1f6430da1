//! Handlers for saved universities and favorite ambassadors.
//!
//! The same endpoints serve both strategies: a signed-in user's set lives in
//! `saved_items`, an anonymous client's set in its local storage directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use unipath_core::error::CoreError;
use unipath_core::favorites::local::{FileStorage, LocalFavoriteStore};
use unipath_core::favorites::{FavoriteKind, FavoriteStore};
use unipath_core::types::DbId;
use unipath_db::favorites::RemoteFavoriteStore;
use unipath_db::repositories::{AmbassadorRepo, UniversityRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::FavoritesOwner;
use crate::response::DataResponse;
use crate::state::AppState;

/// Membership of one entity after a toggle.
#[derive(Debug, Serialize)]
pub struct FavoriteState {
    pub id: DbId,
    pub saved: bool,
}

/// Pick the store for this request's owner.
fn store_for(state: &AppState, owner: &FavoritesOwner) -> AppResult<Box<dyn FavoriteStore>> {
    Ok(match owner {
        FavoritesOwner::User(user_id) => {
            Box::new(RemoteFavoriteStore::new(state.pool.clone(), *user_id))
        }
        FavoritesOwner::Client(client_id) => Box::new(LocalFavoriteStore::new(
            FileStorage::for_client(&state.config.favorites_dir, client_id)?,
        )),
    })
}

/// 404 unless the target entity exists.
async fn ensure_exists(state: &AppState, kind: FavoriteKind, id: DbId) -> AppResult<()> {
    let exists = match kind {
        FavoriteKind::Ambassador => AmbassadorRepo::find_by_id(&state.pool, id).await?.is_some(),
        FavoriteKind::University => UniversityRepo::find_by_id(&state.pool, id).await?.is_some(),
    };
    if exists {
        Ok(())
    } else {
        let entity = match kind {
            FavoriteKind::Ambassador => "Ambassador",
            FavoriteKind::University => "University",
        };
        Err(AppError::Core(CoreError::NotFound { entity, id }))
    }
}

// ---------------------------------------------------------------------------
// GET /favorites/{kind}
// ---------------------------------------------------------------------------

/// List favorite ids of one kind.
pub async fn list_favorites(
    owner: FavoritesOwner,
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<Json<DataResponse<Vec<DbId>>>> {
    let kind = FavoriteKind::from_path(&kind)?;
    let ids = store_for(&state, &owner)?.list(kind).await?;
    Ok(Json(DataResponse { data: ids }))
}

// ---------------------------------------------------------------------------
// PUT /favorites/{kind}/{id}
// ---------------------------------------------------------------------------

/// Save an entity. Saving twice is a no-op.
pub async fn add_favorite(
    owner: FavoritesOwner,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let kind = FavoriteKind::from_path(&kind)?;
    ensure_exists(&state, kind, id).await?;

    store_for(&state, &owner)?.add(kind, id).await?;
    tracing::debug!(kind = kind.as_str(), id, "Favorite saved");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// DELETE /favorites/{kind}/{id}
// ---------------------------------------------------------------------------

/// Unsave an entity. Removing an absent favorite is a no-op, and works even
/// if the entity itself is gone.
pub async fn remove_favorite(
    owner: FavoritesOwner,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let kind = FavoriteKind::from_path(&kind)?;
    store_for(&state, &owner)?.remove(kind, id).await?;
    tracing::debug!(kind = kind.as_str(), id, "Favorite removed");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /favorites/{kind}/{id}/toggle
// ---------------------------------------------------------------------------

/// Flip membership and return the new state.
pub async fn toggle_favorite(
    owner: FavoritesOwner,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<Json<DataResponse<FavoriteState>>> {
    let kind = FavoriteKind::from_path(&kind)?;
    let store = store_for(&state, &owner)?;

    // Unsaving never needs the entity; saving does.
    if !store.contains(kind, id).await? {
        ensure_exists(&state, kind, id).await?;
    }

    let saved = store.toggle(kind, id).await?;
    Ok(Json(DataResponse {
        data: FavoriteState { id, saved },
    }))
}
