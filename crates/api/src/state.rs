use std::sync::Arc;

use crate::auth::observer::AuthStateObserver;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and everything else sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: unipath_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Publishes sign-in, sign-up and sign-out events.
    pub auth_observer: Arc<AuthStateObserver>,
}
