//! DTOs shared by every submission collection on the admin dashboard.

use serde::Deserialize;

/// DTO for changing a submission's status.
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionStatus {
    pub status: String,
}

/// Query parameters for listing submissions.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
