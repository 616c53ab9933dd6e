//! Handlers for the `/magazines` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::{validate_optional_url, validate_title, validate_url};
use coachhub_core::error::CoreError;
use coachhub_core::types::DbId;
use coachhub_db::models::magazine::{CreateMagazine, UpdateMagazine};
use coachhub_db::repositories::MagazineRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "magazines";

fn validate_create(input: &CreateMagazine) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_url("pdf_url", &input.pdf_url)?;
    validate_optional_url("cover_image_url", input.cover_image_url.as_deref())
}

fn validate_update(input: &UpdateMagazine) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(url) = &input.pdf_url {
        validate_url("pdf_url", url)?;
    }
    validate_optional_url("cover_image_url", input.cover_image_url.as_deref())
}

/// GET /api/magazines?all=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        MagazineRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/magazines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let magazine = MagazineRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Magazine",
            id,
        }))?;
    Ok(Json(DataResponse { data: magazine }))
}

/// POST /api/magazines
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMagazine>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let magazine = MagazineRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = magazine.id, "Magazine created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: magazine })))
}

/// PUT /api/magazines/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMagazine>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    let magazine = MagazineRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Magazine",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Magazine updated");
    Ok(Json(DataResponse { data: magazine }))
}

/// DELETE /api/magazines/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MagazineRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Magazine",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Magazine deleted");
    Ok(StatusCode::NO_CONTENT)
}
