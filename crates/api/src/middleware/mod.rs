//! Request extractors for identity and authorization.
//!
//! - [`auth::AuthUser`] -- the user behind a JWT Bearer token.
//! - [`auth::OptionalAuthUser`] -- the same, or nobody when no token is sent.
//! - [`auth::ClientId`] -- the anonymous client scope from `X-Client-Id`.
//! - [`auth::FavoritesOwner`] -- the signed-in user, else the client id.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireAuth`] -- requires any authenticated user.

pub mod auth;
pub mod rbac;
