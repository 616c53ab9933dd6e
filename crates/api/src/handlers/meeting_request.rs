//! Handlers for the `/meeting-requests` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::error::CoreError;
use coachhub_core::inquiry::{
    normalize_phone, validate_email, validate_meeting_status, validate_message, validate_name,
    validate_phone,
};
use coachhub_core::types::DbId;
use coachhub_db::models::meeting_request::{CreateMeetingRequest, UpdateMeetingRequest};
use coachhub_db::repositories::MeetingRequestRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MeetingRequest",
        id,
    })
}

fn validate_create(input: &CreateMeetingRequest) -> Result<(), CoreError> {
    validate_name(&input.name)?;
    validate_phone(&input.phone)?;
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateMeetingRequest) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(status) = &input.status {
        validate_meeting_status(status)?;
    }
    if let Some(notes) = &input.notes {
        validate_message(notes)?;
    }
    Ok(())
}

/// POST /api/meeting-requests
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateMeetingRequest>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;
    input.phone = normalize_phone(&input.phone);

    let request = MeetingRequestRepo::create(&state.pool, &input).await?;

    tracing::info!(id = request.id, "Meeting request received");
    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/meeting-requests?limit=&offset=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let requests = MeetingRequestRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/meeting-requests/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = MeetingRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: request }))
}

/// PUT /api/meeting-requests/{id}
///
/// Admins move the request through its status and keep private `notes`.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateMeetingRequest>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;
    input.phone = input.phone.as_deref().map(normalize_phone);

    let request = MeetingRequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, status = %request.status, "Meeting request updated");
    Ok(Json(DataResponse { data: request }))
}

/// DELETE /api/meeting-requests/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MeetingRequestRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Meeting request deleted");
    Ok(StatusCode::NO_CONTENT)
}
