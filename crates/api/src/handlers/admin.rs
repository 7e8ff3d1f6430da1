//! Admin dashboard handlers.
//!
//! Submission review (list, status change, delete) across every form
//! collection, plus catalog create and delete. Every endpoint requires the
//! `admin` role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use unipath_core::booking::STATUS_CONFIRMED;
use unipath_core::error::CoreError;
use unipath_core::listing::{scholarships, universities, validate_rating};
use unipath_core::search::{clamp_limit, clamp_offset, DEFAULT_SUBMISSION_LIMIT, MAX_SUBMISSION_LIMIT};
use unipath_core::submissions::{self, SubmissionKind};
use unipath_core::types::DbId;
use unipath_db::models::ambassador::{Ambassador, CreateAmbassador};
use unipath_db::models::ambassador_application::AmbassadorApplication;
use unipath_db::models::booking::Booking;
use unipath_db::models::contact::Contact;
use unipath_db::models::feedback::Feedback;
use unipath_db::models::scholarship::{CreateScholarship, Scholarship};
use unipath_db::models::submission::{SubmissionListParams, UpdateSubmissionStatus};
use unipath_db::models::university::{CreateUniversity, University};
use unipath_db::repositories::{
    AmbassadorApplicationRepo, AmbassadorRepo, BookingRepo, ContactRepo, FeedbackRepo,
    ScholarshipRepo, UniversityRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// One page of submissions of a single kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SubmissionList {
    Contacts(Vec<Contact>),
    Feedback(Vec<Feedback>),
    Bookings(Vec<Booking>),
    AmbassadorApplications(Vec<AmbassadorApplication>),
}

/// A single submission of any kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Contact(Contact),
    Feedback(Feedback),
    Booking(Booking),
    AmbassadorApplication(AmbassadorApplication),
}

impl Submission {
    fn status(&self) -> &str {
        match self {
            Submission::Contact(c) => &c.status,
            Submission::Feedback(f) => &f.status,
            Submission::Booking(b) => &b.status,
            Submission::AmbassadorApplication(a) => &a.status,
        }
    }
}

fn not_found(kind: SubmissionKind, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: kind.entity_name(),
        id,
    })
}

async fn find_submission(
    state: &AppState,
    kind: SubmissionKind,
    id: DbId,
) -> AppResult<Option<Submission>> {
    let pool = &state.pool;
    Ok(match kind {
        SubmissionKind::Contact => ContactRepo::find_by_id(pool, id).await?.map(Submission::Contact),
        SubmissionKind::Feedback => {
            FeedbackRepo::find_by_id(pool, id).await?.map(Submission::Feedback)
        }
        SubmissionKind::Booking => BookingRepo::find_by_id(pool, id).await?.map(Submission::Booking),
        SubmissionKind::AmbassadorApplication => AmbassadorApplicationRepo::find_by_id(pool, id)
            .await?
            .map(Submission::AmbassadorApplication),
    })
}

// ---------------------------------------------------------------------------
// GET /admin/submissions/{kind}
// ---------------------------------------------------------------------------

/// List submissions of one kind, newest first, with an optional status filter.
pub async fn list_submissions(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<SubmissionListParams>,
) -> AppResult<Json<DataResponse<SubmissionList>>> {
    let kind = SubmissionKind::from_path(&kind)?;
    if let Some(ref s) = params.status {
        submissions::validate_status(kind, s)?;
    }

    let limit = clamp_limit(params.limit, DEFAULT_SUBMISSION_LIMIT, MAX_SUBMISSION_LIMIT);
    let offset = clamp_offset(params.offset);
    let status = params.status.as_deref();
    let pool = &state.pool;

    let data = match kind {
        SubmissionKind::Contact => {
            SubmissionList::Contacts(ContactRepo::list_filtered(pool, status, limit, offset).await?)
        }
        SubmissionKind::Feedback => {
            SubmissionList::Feedback(FeedbackRepo::list_filtered(pool, status, limit, offset).await?)
        }
        SubmissionKind::Booking => SubmissionList::Bookings(
            BookingRepo::list_filtered(pool, status, None, limit, offset).await?,
        ),
        SubmissionKind::AmbassadorApplication => SubmissionList::AmbassadorApplications(
            AmbassadorApplicationRepo::list_filtered(pool, status, limit, offset).await?,
        ),
    };

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// PUT /admin/submissions/{kind}/{id}/status
// ---------------------------------------------------------------------------

/// Move a submission to a new status.
///
/// Only transitions allowed for the kind are accepted. Confirming a booking
/// into a slot another confirmed booking holds is refused with 409.
pub async fn update_submission_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
    Json(input): Json<UpdateSubmissionStatus>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let kind = SubmissionKind::from_path(&kind)?;
    submissions::validate_status(kind, &input.status)?;

    let current = find_submission(&state, kind, id)
        .await?
        .ok_or_else(|| not_found(kind, id))?;
    submissions::validate_transition(kind, current.status(), &input.status)?;

    if let Submission::Booking(ref booking) = current {
        if input.status == STATUS_CONFIRMED
            && BookingRepo::is_slot_confirmed(
                &state.pool,
                booking.booking_date,
                &booking.booking_time,
                booking.ambassador_id,
                Some(booking.id),
            )
            .await?
        {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "The {} slot on {} is already confirmed for another booking",
                booking.booking_time, booking.booking_date
            ))));
        }
    }

    let pool = &state.pool;
    let status = input.status.as_str();
    let updated = match kind {
        SubmissionKind::Contact => ContactRepo::update_status(pool, id, status)
            .await?
            .map(Submission::Contact),
        SubmissionKind::Feedback => FeedbackRepo::update_status(pool, id, status)
            .await?
            .map(Submission::Feedback),
        SubmissionKind::Booking => BookingRepo::update_status(pool, id, status)
            .await?
            .map(Submission::Booking),
        SubmissionKind::AmbassadorApplication => {
            AmbassadorApplicationRepo::update_status(pool, id, status)
                .await?
                .map(Submission::AmbassadorApplication)
        }
    }
    .ok_or_else(|| not_found(kind, id))?;

    tracing::info!(
        kind = kind.entity_name(),
        id,
        from = current.status(),
        to = status,
        admin_id = admin.user_id,
        "Submission status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/submissions/{kind}/{id}
// ---------------------------------------------------------------------------

pub async fn delete_submission(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let kind = SubmissionKind::from_path(&kind)?;
    let pool = &state.pool;

    let deleted = match kind {
        SubmissionKind::Contact => ContactRepo::delete(pool, id).await?,
        SubmissionKind::Feedback => FeedbackRepo::delete(pool, id).await?,
        SubmissionKind::Booking => BookingRepo::delete(pool, id).await?,
        SubmissionKind::AmbassadorApplication => AmbassadorApplicationRepo::delete(pool, id).await?,
    };
    if !deleted {
        return Err(not_found(kind, id));
    }

    tracing::info!(kind = kind.entity_name(), id, admin_id = admin.user_id, "Submission deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Catalog: create
// ---------------------------------------------------------------------------

fn require_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        ))));
    }
    Ok(())
}

/// POST /api/v1/admin/universities
pub async fn create_university(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUniversity>,
) -> AppResult<(StatusCode, Json<DataResponse<University>>)> {
    require_text(&input.name, "Name")?;
    require_text(&input.location, "Location")?;
    universities::validate_type(&input.university_type)?;
    validate_rating(input.rating)?;

    let university = UniversityRepo::create(&state.pool, &input).await?;
    tracing::info!(university_id = university.id, admin_id = admin.user_id, "University created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: university })))
}

/// POST /api/v1/admin/ambassadors
pub async fn create_ambassador(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAmbassador>,
) -> AppResult<(StatusCode, Json<DataResponse<Ambassador>>)> {
    require_text(&input.name, "Name")?;
    require_text(&input.university, "University")?;
    validate_rating(input.rating)?;
    if input.review_count < 0 || input.students_helped < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Review count and students helped must not be negative".into(),
        )));
    }

    let ambassador = AmbassadorRepo::create(&state.pool, &input).await?;
    tracing::info!(ambassador_id = ambassador.id, admin_id = admin.user_id, "Ambassador created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: ambassador })))
}

/// POST /api/v1/admin/scholarships
pub async fn create_scholarship(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateScholarship>,
) -> AppResult<(StatusCode, Json<DataResponse<Scholarship>>)> {
    require_text(&input.title, "Title")?;
    require_text(&input.provider, "Provider")?;
    if let Some(ref status) = input.status {
        scholarships::validate_status(status)?;
    }

    let scholarship = ScholarshipRepo::create(&state.pool, &input).await?;
    tracing::info!(scholarship_id = scholarship.id, admin_id = admin.user_id, "Scholarship created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: scholarship })))
}

// ---------------------------------------------------------------------------
// Catalog: delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/admin/universities/{id}
pub async fn delete_university(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !UniversityRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "University",
            id,
        }));
    }
    tracing::info!(university_id = id, admin_id = admin.user_id, "University deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/admin/ambassadors/{id}
pub async fn delete_ambassador(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AmbassadorRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Ambassador",
            id,
        }));
    }
    tracing::info!(ambassador_id = id, admin_id = admin.user_id, "Ambassador deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/admin/scholarships/{id}
pub async fn delete_scholarship(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ScholarshipRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Scholarship",
            id,
        }));
    }
    tracing::info!(scholarship_id = id, admin_id = admin.user_id, "Scholarship deleted");
    Ok(StatusCode::NO_CONTENT)
}
