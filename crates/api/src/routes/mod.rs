pub mod admin;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod profile;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     sign up (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user (requires auth)
/// /auth/password-reset                             request reset (public, always 202)
/// /auth/password-reset/confirm                     set new password (public)
///
/// /profile                                         get, update (requires auth)
///
/// /universities                                    list (search, filter, sort)
/// /universities/{id}                               get
/// /ambassadors                                     list (search, filter, sort)
/// /ambassadors/{id}                                get
/// /scholarships                                    list (search, filter, sort)
/// /scholarships/{id}                               get
///
/// /favorites/{kind}                                list (auth or X-Client-Id)
/// /favorites/{kind}/{id}                           save, unsave
/// /favorites/{kind}/{id}/toggle                    toggle (POST)
///
/// /contacts                                        submit (POST)
/// /feedback                                        submit (POST)
/// /ambassador-applications                         submit (POST, requires auth)
///
/// /bookings                                        request a session (POST, auth optional)
/// /bookings/availability                           daily slot grid (GET)
/// /bookings/mine                                   own bookings (requires auth)
///
/// /admin/submissions/{kind}                        list (admin only)
/// /admin/submissions/{kind}/{id}/status            update status (PUT)
/// /admin/submissions/{kind}/{id}                   delete
/// /admin/universities                              create
/// /admin/universities/{id}                         delete
/// /admin/ambassadors                               create
/// /admin/ambassadors/{id}                          delete
/// /admin/scholarships                              create
/// /admin/scholarships/{id}                         delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and account recovery.
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        // Public catalog.
        .nest("/universities", catalog::universities_router())
        .nest("/ambassadors", catalog::ambassadors_router())
        .nest("/scholarships", catalog::scholarships_router())
        // Saved universities and favorite ambassadors.
        .nest("/favorites", favorites::router())
        // Visitor forms.
        .merge(submissions::router())
        .nest("/bookings", bookings::router())
        // Admin dashboard.
        .nest("/admin", admin::router())
}
