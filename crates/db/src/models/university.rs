//! University catalog model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use unipath_core::listing::universities::UniversityRecord;
use unipath_core::types::{DbId, Timestamp};

/// One program offered by a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDetail {
    pub name: String,
    pub duration: String,
    pub degree: String,
    #[serde(default)]
    pub description: String,
}

/// A row from the `universities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct University {
    pub id: DbId,
    pub name: String,
    pub location: String,
    /// `Public` or `Private`.
    #[serde(rename = "type")]
    pub university_type: String,
    pub ranking: i32,
    pub tuition: String,
    pub acceptance_rate: String,
    pub rating: f64,
    pub programs: Vec<String>,
    pub facilities: Vec<String>,
    pub admission_requirements: Vec<String>,
    pub program_details: Json<Vec<ProgramDetail>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UniversityRecord for University {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn university_type(&self) -> &str {
        &self.university_type
    }
    fn programs(&self) -> &[String] {
        &self.programs
    }
    fn ranking(&self) -> i32 {
        self.ranking
    }
    fn rating(&self) -> f64 {
        self.rating
    }
}

/// DTO for creating a university from the admin dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUniversity {
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub university_type: String,
    pub ranking: i32,
    #[serde(default)]
    pub tuition: String,
    #[serde(default)]
    pub acceptance_rate: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub admission_requirements: Vec<String>,
    #[serde(default)]
    pub program_details: Vec<ProgramDetail>,
}

/// Query parameters for `GET /universities`.
#[derive(Debug, Default, Deserialize)]
pub struct UniversityListParams {
    pub search: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub university_type: Option<String>,
    pub program: Option<String>,
    pub rating_min: Option<f64>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
