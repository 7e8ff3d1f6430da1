//! Handlers for the signed-in user's own profile.

use axum::extract::State;
use axum::Json;
use unipath_core::error::CoreError;
use unipath_core::forms::{validate_form, ProfileUpdate};
use unipath_db::models::user::UserResponse;
use unipath_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(&row),
    }))
}

/// PUT /api/v1/profile
///
/// Partial update; absent fields keep their stored values.
pub async fn update_profile(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<ProfileUpdate>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    validate_form(&input)?;

    let row = UserRepo::update_profile(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    tracing::info!(user_id = user.user_id, "Profile updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(&row),
    }))
}
