//! Response envelope types.
//!
//! Successful responses are wrapped as `{ "data": ... }`; errors use the
//! `{ "error", "code" }` body produced by [`AppError`](crate::error::AppError).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
