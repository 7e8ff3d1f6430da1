//! Background tasks.
//!
//! Each submodule provides a long-running async function intended to be
//! spawned via `tokio::spawn`. Periodic jobs accept a `CancellationToken`;
//! subscribers stop when their source closes.

pub mod auth_log;
pub mod session_cleanup;
