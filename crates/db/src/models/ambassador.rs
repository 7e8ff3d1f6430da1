//! Ambassador catalog model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipath_core::listing::ambassadors::AmbassadorRecord;
use unipath_core::types::{DbId, Timestamp};

/// A row from the `ambassadors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ambassador {
    pub id: DbId,
    pub name: String,
    pub university: String,
    pub program: String,
    pub location: String,
    pub rating: f64,
    pub review_count: i32,
    pub students_helped: i32,
    pub specialties: Vec<String>,
    pub is_available: bool,
    pub bio: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AmbassadorRecord for Ambassador {
    fn name(&self) -> &str {
        &self.name
    }
    fn university(&self) -> &str {
        &self.university
    }
    fn program(&self) -> &str {
        &self.program
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn specialties(&self) -> &[String] {
        &self.specialties
    }
    fn rating(&self) -> f64 {
        self.rating
    }
    fn review_count(&self) -> i32 {
        self.review_count
    }
    fn students_helped(&self) -> i32 {
        self.students_helped
    }
    fn is_available(&self) -> bool {
        self.is_available
    }
}

/// DTO for creating an ambassador from the admin dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmbassador {
    pub name: String,
    pub university: String,
    pub program: String,
    pub location: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i32,
    #[serde(default)]
    pub students_helped: i32,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub is_available: Option<bool>,
    #[serde(default)]
    pub bio: String,
    pub image_url: Option<String>,
}

/// Query parameters for `GET /ambassadors`.
#[derive(Debug, Default, Deserialize)]
pub struct AmbassadorListParams {
    pub search: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    pub specialty: Option<String>,
    pub rating_min: Option<f64>,
    pub experience_min: Option<i32>,
    #[serde(default)]
    pub available_only: bool,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
