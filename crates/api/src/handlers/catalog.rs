//! Public catalog listings: universities, ambassadors and scholarships.
//!
//! Each list handler fetches one clamped page from the database and narrows
//! it in memory with the listing engine, so filter and sort semantics are
//! the same ones the unit tests pin down.

use axum::extract::{Path, Query, State};
use axum::Json;
use unipath_core::error::CoreError;
use unipath_core::listing::ambassadors::{AmbassadorFilter, AmbassadorSort};
use unipath_core::listing::scholarships::{ScholarshipFilter, ScholarshipSort};
use unipath_core::listing::universities::{UniversityFilter, UniversitySort};
use unipath_core::listing::{refine, Criterion};
use unipath_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use unipath_core::types::DbId;
use unipath_db::models::ambassador::{Ambassador, AmbassadorListParams};
use unipath_db::models::scholarship::{Scholarship, ScholarshipListParams};
use unipath_db::models::university::{University, UniversityListParams};
use unipath_db::repositories::{AmbassadorRepo, ScholarshipRepo, UniversityRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (
        clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        clamp_offset(offset),
    )
}

// ---------------------------------------------------------------------------
// Universities
// ---------------------------------------------------------------------------

/// GET /api/v1/universities
pub async fn list_universities(
    State(state): State<AppState>,
    Query(params): Query<UniversityListParams>,
) -> AppResult<Json<DataResponse<Vec<University>>>> {
    // Reject a bad sort key before touching the database.
    let sort = UniversitySort::parse(params.sort.as_deref())?;
    let filter = UniversityFilter {
        search: Criterion::from_search(params.search.as_deref()),
        location: Criterion::from_param(params.location.as_deref()),
        university_type: Criterion::from_param(params.university_type.as_deref()),
        program: Criterion::from_param(params.program.as_deref()),
        rating_min: Criterion::from_option(params.rating_min),
    };

    let (limit, offset) = page(params.limit, params.offset);
    let rows = UniversityRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse {
        data: refine(&rows, &filter, sort),
    }))
}

/// GET /api/v1/universities/{id}
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<University>>> {
    let university = UniversityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "University",
            id,
        }))?;
    Ok(Json(DataResponse { data: university }))
}

// ---------------------------------------------------------------------------
// Ambassadors
// ---------------------------------------------------------------------------

/// GET /api/v1/ambassadors
pub async fn list_ambassadors(
    State(state): State<AppState>,
    Query(params): Query<AmbassadorListParams>,
) -> AppResult<Json<DataResponse<Vec<Ambassador>>>> {
    let sort = AmbassadorSort::parse(params.sort.as_deref())?;
    let filter = AmbassadorFilter {
        search: Criterion::from_search(params.search.as_deref()),
        university: Criterion::from_param(params.university.as_deref()),
        program: Criterion::from_param(params.program.as_deref()),
        specialty: Criterion::from_param(params.specialty.as_deref()),
        rating_min: Criterion::from_option(params.rating_min),
        experience_min: Criterion::from_option(params.experience_min),
        available_only: params.available_only,
    };

    let (limit, offset) = page(params.limit, params.offset);
    let rows = AmbassadorRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse {
        data: refine(&rows, &filter, sort),
    }))
}

/// GET /api/v1/ambassadors/{id}
pub async fn get_ambassador(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Ambassador>>> {
    let ambassador = AmbassadorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ambassador",
            id,
        }))?;
    Ok(Json(DataResponse { data: ambassador }))
}

// ---------------------------------------------------------------------------
// Scholarships
// ---------------------------------------------------------------------------

/// GET /api/v1/scholarships
pub async fn list_scholarships(
    State(state): State<AppState>,
    Query(params): Query<ScholarshipListParams>,
) -> AppResult<Json<DataResponse<Vec<Scholarship>>>> {
    let sort = ScholarshipSort::parse(params.sort.as_deref())?;
    let filter = ScholarshipFilter {
        search: Criterion::from_search(params.search.as_deref()),
        scholarship_type: Criterion::from_param(params.scholarship_type.as_deref()),
        level: Criterion::from_param(params.level.as_deref()),
        field: Criterion::from_param(params.field.as_deref()),
        status: Criterion::from_param(params.status.as_deref()),
    };

    let (limit, offset) = page(params.limit, params.offset);
    let rows = ScholarshipRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse {
        data: refine(&rows, &filter, sort),
    }))
}

/// GET /api/v1/scholarships/{id}
pub async fn get_scholarship(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Scholarship>>> {
    let scholarship = ScholarshipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scholarship",
            id,
        }))?;
    Ok(Json(DataResponse { data: scholarship }))
}
