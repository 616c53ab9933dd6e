//! Handlers for the `/contacts` resource (contact-form messages).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::error::CoreError;
use coachhub_core::inquiry::{
    normalize_phone, validate_email, validate_message, validate_name, validate_phone,
};
use coachhub_core::types::DbId;
use coachhub_db::models::contact::{CreateContact, UpdateContact};
use coachhub_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Contact",
        id,
    })
}

fn validate_create(input: &CreateContact) -> Result<(), CoreError> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }
    validate_message(&input.message)
}

fn validate_update(input: &UpdateContact) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }
    if let Some(message) = &input.message {
        validate_message(message)?;
    }
    Ok(())
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateContact>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;
    input.phone = input.phone.as_deref().map(normalize_phone);

    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(id = contact.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(DataResponse { data: contact })))
}

/// GET /api/contacts?limit=&offset=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let contacts = ContactRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// GET /api/contacts/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: contact }))
}

/// PUT /api/contacts/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateContact>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;
    input.phone = input.phone.as_deref().map(normalize_phone);

    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Contact message updated");
    Ok(Json(DataResponse { data: contact }))
}

/// DELETE /api/contacts/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Contact message deleted");
    Ok(StatusCode::NO_CONTENT)
}
