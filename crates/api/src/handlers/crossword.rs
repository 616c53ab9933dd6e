//! Handlers for the `/crosswords` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::validate_title;
use coachhub_core::error::CoreError;
use coachhub_core::puzzle::{validate_clues, validate_difficulty, validate_grid_size};
use coachhub_core::types::DbId;
use coachhub_db::models::crossword::{CreateCrossword, UpdateCrossword};
use coachhub_db::repositories::CrosswordRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "crosswords";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Crossword",
        id,
    })
}

fn validate_create(input: &CreateCrossword) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    if let Some(difficulty) = &input.difficulty {
        validate_difficulty(difficulty)?;
    }
    validate_grid_size(input.grid_size)?;
    validate_clues(input.grid_size, &input.clues)
}

/// GET /api/crosswords?all=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        CrosswordRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/crosswords/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let crossword = CrosswordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: crossword }))
}

/// POST /api/crosswords
///
/// Every clue must fit inside the grid from its start cell.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCrossword>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let crossword = CrosswordRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = crossword.id, clues = crossword.clues.0.len(), "Crossword created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: crossword })))
}

/// PUT /api/crosswords/{id}
///
/// When either `grid_size` or `clues` changes, the resulting combination is
/// re-validated against the stored values.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCrossword>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title).map_err(AppError::Core)?;
    }
    if let Some(difficulty) = &input.difficulty {
        validate_difficulty(difficulty).map_err(AppError::Core)?;
    }
    if let Some(size) = input.grid_size {
        validate_grid_size(size).map_err(AppError::Core)?;
    }

    if input.grid_size.is_some() || input.clues.is_some() {
        let existing = CrosswordRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let grid_size = input.grid_size.unwrap_or(existing.grid_size);
        let clues = input.clues.as_deref().unwrap_or(&existing.clues.0);
        validate_clues(grid_size, clues).map_err(AppError::Core)?;
    }

    let crossword = CrosswordRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Crossword updated");
    Ok(Json(DataResponse { data: crossword }))
}

/// DELETE /api/crosswords/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CrosswordRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Crossword deleted");
    Ok(StatusCode::NO_CONTENT)
}
