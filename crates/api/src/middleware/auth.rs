//! Identity extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use unipath_core::error::CoreError;
use unipath_core::favorites::local::validate_client_id;
use unipath_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Header carrying an anonymous client's id.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// From `claims.sub`.
    pub user_id: DbId,
    /// `student` or `admin`.
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        user_from_header(auth_header, state)
    }
}

fn user_from_header(auth_header: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    Ok(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    })
}

/// The authenticated user if an `Authorization` header is present.
///
/// No header means anonymous (`None`). A header that is present but invalid
/// is still rejected with 401 rather than silently downgraded.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get("authorization") {
            None => Ok(OptionalAuthUser(None)),
            Some(value) => {
                let header = value.to_str().map_err(|_| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid Authorization header".into(),
                    ))
                })?;
                user_from_header(header, state).map(|user| OptionalAuthUser(Some(user)))
            }
        }
    }
}

/// Anonymous client id from the `X-Client-Id` header.
///
/// Scopes locally stored favorites to one browser. Validated so it can be
/// used as a directory name.
#[derive(Debug, Clone)]
pub struct ClientId(pub String);

impl FromRequestParts<AppState> for ClientId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Sign in or send an X-Client-Id header to keep favorites".into(),
                )
            })?;

        validate_client_id(raw)?;
        Ok(ClientId(raw.to_string()))
    }
}

/// Who owns the favorites a request reads or writes.
///
/// A signed-in user owns a server-side set; anyone else must identify their
/// browser with `X-Client-Id` and gets a locally stored set.
#[derive(Debug, Clone)]
pub enum FavoritesOwner {
    User(DbId),
    Client(String),
}

impl FromRequestParts<AppState> for FavoritesOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let OptionalAuthUser(Some(user)) =
            OptionalAuthUser::from_request_parts(parts, state).await?
        {
            return Ok(FavoritesOwner::User(user.user_id));
        }
        let ClientId(client_id) = ClientId::from_request_parts(parts, state).await?;
        Ok(FavoritesOwner::Client(client_id))
    }
}
