//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers validate input, delegate to the repositories in `unipath_db` and
//! the domain logic in `unipath_core`, and map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod favorites;
pub mod profile;
pub mod submissions;
