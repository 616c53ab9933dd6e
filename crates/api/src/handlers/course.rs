//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::{
    validate_course_category, validate_course_mode, validate_non_negative,
    validate_optional_url, validate_title,
};
use coachhub_core::error::CoreError;
use coachhub_core::types::DbId;
use coachhub_db::models::course::{CreateCourse, UpdateCourse};
use coachhub_db::repositories::CourseRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Cache namespace for course lists.
const RESOURCE: &str = "courses";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_numbers(duration_weeks: Option<i32>, fee: Option<i64>) -> Result<(), CoreError> {
    if let Some(weeks) = duration_weeks {
        validate_non_negative("duration_weeks", i64::from(weeks))?;
    }
    if let Some(fee) = fee {
        validate_non_negative("fee", fee)?;
    }
    Ok(())
}

fn validate_create(input: &CreateCourse) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_course_category(&input.category)?;
    if let Some(mode) = &input.mode {
        validate_course_mode(mode)?;
    }
    validate_numbers(input.duration_weeks, input.fee)?;
    validate_optional_url("image_url", input.image_url.as_deref())
}

fn validate_update(input: &UpdateCourse) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(category) = &input.category {
        validate_course_category(category)?;
    }
    if let Some(mode) = &input.mode {
        validate_course_mode(mode)?;
    }
    validate_numbers(input.duration_weeks, input.fee)?;
    validate_optional_url("image_url", input.image_url.as_deref())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/courses?all=false
///
/// List courses, newest first. Served through the response cache.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        CourseRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(DataResponse { data: course }))
}

/// POST /api/courses
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let course = CourseRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = course.id, "Course created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// PUT /api/courses/{id}
///
/// Only the submitted fields change.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Course updated");
    Ok(Json(DataResponse { data: course }))
}

/// DELETE /api/courses/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CourseRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Course deleted");
    Ok(StatusCode::NO_CONTENT)
}
