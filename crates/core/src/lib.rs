//! Domain logic for the UniPath consulting backend.
//!
//! Everything in this crate is free of database and HTTP concerns so it can be
//! exercised directly by unit tests and reused by the `db` and `api` crates.

pub mod booking;
pub mod error;
pub mod favorites;
pub mod forms;
pub mod listing;
pub mod roles;
pub mod search;
pub mod submissions;
pub mod types;
