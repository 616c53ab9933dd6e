//! Handlers for the `/study-materials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::{validate_material_type, validate_title, validate_url};
use coachhub_core::error::CoreError;
use coachhub_core::types::DbId;
use coachhub_db::models::study_material::{CreateStudyMaterial, UpdateStudyMaterial};
use coachhub_db::repositories::StudyMaterialRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "study-materials";

fn validate_create(input: &CreateStudyMaterial) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_material_type(&input.material_type)?;
    validate_url("file_url", &input.file_url)
}

fn validate_update(input: &UpdateStudyMaterial) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(material_type) = &input.material_type {
        validate_material_type(material_type)?;
    }
    if let Some(url) = &input.file_url {
        validate_url("file_url", url)?;
    }
    Ok(())
}

/// GET /api/study-materials?all=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        StudyMaterialRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/study-materials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let material = StudyMaterialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyMaterial",
            id,
        }))?;
    Ok(Json(DataResponse { data: material }))
}

/// POST /api/study-materials
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStudyMaterial>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let material = StudyMaterialRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = material.id, "Study material created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: material })))
}

/// PUT /api/study-materials/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudyMaterial>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    let material = StudyMaterialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudyMaterial",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Study material updated");
    Ok(Json(DataResponse { data: material }))
}

/// DELETE /api/study-materials/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !StudyMaterialRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "StudyMaterial",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Study material deleted");
    Ok(StatusCode::NO_CONTENT)
}
