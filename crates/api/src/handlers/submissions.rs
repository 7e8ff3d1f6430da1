//! Handlers for visitor form submissions: contact, feedback and ambassador
//! applications.
//!
//! Every form is validated before anything is written; an invalid form
//! returns 400 and leaves no row behind.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use unipath_core::forms::{
    validate_form, AmbassadorApplicationForm, ContactForm, FeedbackForm,
};
use unipath_db::models::ambassador_application::AmbassadorApplication;
use unipath_db::models::contact::Contact;
use unipath_db::models::feedback::Feedback;
use unipath_db::repositories::{AmbassadorApplicationRepo, ContactRepo, FeedbackRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contacts
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Contact>>)> {
    validate_form(&input)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: contact })))
}

/// POST /api/v1/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(input): Json<FeedbackForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Feedback>>)> {
    validate_form(&input)?;

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    tracing::info!(feedback_id = feedback.id, rating = feedback.rating, "Feedback received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// POST /api/v1/ambassador-applications
pub async fn submit_ambassador_application(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<AmbassadorApplicationForm>,
) -> AppResult<(StatusCode, Json<DataResponse<AmbassadorApplication>>)> {
    validate_form(&input)?;

    let application = AmbassadorApplicationRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(
        application_id = application.id,
        user_id = user.user_id,
        "Ambassador application submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}
