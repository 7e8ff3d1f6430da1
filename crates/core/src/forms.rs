//! Visitor-facing form payloads and their field rules.
//!
//! Each form is validated with [`validate_form`] before anything is written;
//! a failing form never reaches the database.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Minimum message length for contact and feedback forms.
pub const MIN_MESSAGE_LENGTH: u64 = 10;

/// Maximum message length for contact and feedback forms.
pub const MAX_MESSAGE_LENGTH: u64 = 5_000;

/// Minimum motivation length on an ambassador application.
pub const MIN_MOTIVATION_LENGTH: u64 = 50;

/// `POST /contacts`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,
    #[validate(length(
        min = "MIN_MESSAGE_LENGTH",
        max = "MAX_MESSAGE_LENGTH",
        message = "Message must be at least 10 characters and at most 5000 characters"
    ))]
    pub message: String,
}

/// `POST /bookings`
///
/// `time` is checked against the slot grid separately, see
/// [`crate::booking::parse_slot_time`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
    pub ambassador_id: Option<DbId>,
    pub date: NaiveDate,
    pub time: String,
    #[validate(length(max = 200, message = "Topic must be at most 200 characters"))]
    pub topic: Option<String>,
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// `POST /feedback`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackForm {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(
        min = "MIN_MESSAGE_LENGTH",
        max = "MAX_MESSAGE_LENGTH",
        message = "Message must be at least 10 characters and at most 5000 characters"
    ))]
    pub message: String,
}

/// `POST /ambassador-applications`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AmbassadorApplicationForm {
    #[validate(length(min = 1, max = 100, message = "Full name is required (max 100 characters)"))]
    pub full_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "University is required"))]
    pub university: String,
    #[validate(length(min = 1, max = 200, message = "Program is required"))]
    pub program: String,
    #[validate(range(min = 1, max = 10, message = "Year of study must be between 1 and 10"))]
    pub year_of_study: i32,
    #[validate(length(
        min = "MIN_MOTIVATION_LENGTH",
        message = "Motivation must be at least 50 characters"
    ))]
    pub motivation: String,
    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    pub linkedin_url: Option<String>,
}

/// `PUT /profile`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "Education level must be at most 100 characters"))]
    pub education_level: Option<String>,
}

/// `POST /auth/signup`. Password strength is checked against the configured
/// minimum by the auth layer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "Full name is required (max 100 characters)"))]
    pub full_name: String,
}

/// Run the derived rules and flatten any failures into one validation error.
///
/// Messages are sorted so the combined text is stable across runs.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}

/// Lowercase and trim an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
