//! Scholarship catalog model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipath_core::listing::scholarships::ScholarshipRecord;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `scholarships` table.
///
/// `amount` is display text and is never parsed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scholarship {
    pub id: DbId,
    pub title: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub scholarship_type: String,
    pub amount: String,
    pub deadline: NaiveDate,
    pub eligibility: String,
    pub level: String,
    pub fields: Vec<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub selection_criteria: Vec<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ScholarshipRecord for Scholarship {
    fn title(&self) -> &str {
        &self.title
    }
    fn provider(&self) -> &str {
        &self.provider
    }
    fn scholarship_type(&self) -> &str {
        &self.scholarship_type
    }
    fn level(&self) -> &str {
        &self.level
    }
    fn fields(&self) -> &[String] {
        &self.fields
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn deadline(&self) -> NaiveDate {
        self.deadline
    }
    fn status(&self) -> &str {
        &self.status
    }
}

/// DTO for creating a scholarship from the admin dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScholarship {
    pub title: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub scholarship_type: String,
    #[serde(default)]
    pub amount: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub eligibility: String,
    pub level: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub selection_criteria: Vec<String>,
    /// Defaults to `open`.
    pub status: Option<String>,
}

/// Query parameters for `GET /scholarships`.
#[derive(Debug, Default, Deserialize)]
pub struct ScholarshipListParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub scholarship_type: Option<String>,
    pub level: Option<String>,
    pub field: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
