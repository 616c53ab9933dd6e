//! Handlers for the `/videos` resource.
//!
//! Video URLs are unique: the same upload cannot be listed twice.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::{validate_optional_url, validate_title, validate_url, validate_video_type};
use coachhub_core::error::CoreError;
use coachhub_core::types::DbId;
use coachhub_db::models::video::{CreateVideo, UpdateVideo};
use coachhub_db::repositories::VideoRepo;
use coachhub_db::DbPool;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "videos";

fn validate_create(input: &CreateVideo) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_url("video_url", &input.video_url)?;
    validate_optional_url("thumbnail_url", input.thumbnail_url.as_deref())?;
    if let Some(video_type) = &input.video_type {
        validate_video_type(video_type)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateVideo) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(url) = &input.video_url {
        validate_url("video_url", url)?;
    }
    validate_optional_url("thumbnail_url", input.thumbnail_url.as_deref())?;
    if let Some(video_type) = &input.video_type {
        validate_video_type(video_type)?;
    }
    Ok(())
}

/// Reject `video_url` if another video already uses it.
async fn ensure_url_free(pool: &DbPool, url: &str, own_id: Option<DbId>) -> AppResult<()> {
    match VideoRepo::find_by_url(pool, url).await? {
        Some(existing) if Some(existing.id) != own_id => Err(AppError::Core(
            CoreError::Conflict(format!("A video with URL '{url}' already exists")),
        )),
        _ => Ok(()),
    }
}

/// GET /api/videos?all=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        VideoRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;
    Ok(Json(DataResponse { data: video }))
}

/// POST /api/videos
///
/// Returns 409 if the URL is already listed.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;
    ensure_url_free(&state.pool, &input.video_url, None).await?;

    let video = VideoRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = video.id, "Video created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// PUT /api/videos/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;
    if let Some(url) = &input.video_url {
        ensure_url_free(&state.pool, url, Some(id)).await?;
    }

    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Video updated");
    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/videos/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !VideoRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}
