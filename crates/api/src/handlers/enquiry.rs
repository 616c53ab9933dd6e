//! Handlers for the `/enquiries` resource.
//!
//! Visitors submit enquiries without authentication; reading and working
//! through them is admin-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::error::CoreError;
use coachhub_core::inquiry::{
    normalize_phone, validate_email, validate_enquiry_status, validate_message, validate_name,
    validate_phone,
};
use coachhub_core::types::DbId;
use coachhub_db::models::enquiry::{CreateEnquiry, UpdateEnquiry};
use coachhub_db::repositories::EnquiryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Enquiry",
        id,
    })
}

fn validate_create(input: &CreateEnquiry) -> Result<(), CoreError> {
    validate_name(&input.name)?;
    validate_phone(&input.phone)?;
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(message) = &input.message {
        validate_message(message)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateEnquiry) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(message) = &input.message {
        validate_message(message)?;
    }
    if let Some(status) = &input.status {
        validate_enquiry_status(status)?;
    }
    Ok(())
}

/// POST /api/enquiries
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateEnquiry>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;
    input.phone = normalize_phone(&input.phone);

    let enquiry = EnquiryRepo::create(&state.pool, &input).await?;

    tracing::info!(id = enquiry.id, "Enquiry received");
    Ok((StatusCode::CREATED, Json(DataResponse { data: enquiry })))
}

/// GET /api/enquiries?status=&limit=&offset=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<impl IntoResponse> {
    let enquiries = match params.status.as_deref() {
        Some(status) => {
            validate_enquiry_status(status).map_err(AppError::Core)?;
            EnquiryRepo::list_by_status(&state.pool, status, params.limit, params.offset).await?
        }
        None => EnquiryRepo::list(&state.pool, params.limit, params.offset).await?,
    };
    Ok(Json(DataResponse { data: enquiries }))
}

/// GET /api/enquiries/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: enquiry }))
}

/// PUT /api/enquiries/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateEnquiry>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;
    input.phone = input.phone.as_deref().map(normalize_phone);

    let enquiry = EnquiryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, status = %enquiry.status, "Enquiry updated");
    Ok(Json(DataResponse { data: enquiry }))
}

/// DELETE /api/enquiries/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !EnquiryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Enquiry deleted");
    Ok(StatusCode::NO_CONTENT)
}
