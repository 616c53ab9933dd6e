//! Handlers for the `/puzzle-sets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::validate_title;
use coachhub_core::error::CoreError;
use coachhub_core::puzzle::{validate_difficulty, validate_puzzles};
use coachhub_core::types::DbId;
use coachhub_db::models::puzzle_set::{CreatePuzzleSet, UpdatePuzzleSet};
use coachhub_db::repositories::PuzzleSetRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "puzzle-sets";

fn validate_create(input: &CreatePuzzleSet) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    if let Some(difficulty) = &input.difficulty {
        validate_difficulty(difficulty)?;
    }
    validate_puzzles(&input.puzzles)
}

fn validate_update(input: &UpdatePuzzleSet) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(difficulty) = &input.difficulty {
        validate_difficulty(difficulty)?;
    }
    if let Some(puzzles) = &input.puzzles {
        validate_puzzles(puzzles)?;
    }
    Ok(())
}

/// GET /api/puzzle-sets?all=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        PuzzleSetRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/puzzle-sets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let set = PuzzleSetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PuzzleSet",
            id,
        }))?;
    Ok(Json(DataResponse { data: set }))
}

/// POST /api/puzzle-sets
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePuzzleSet>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let set = PuzzleSetRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = set.id, puzzles = set.puzzles.0.len(), "Puzzle set created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: set })))
}

/// PUT /api/puzzle-sets/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePuzzleSet>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    let set = PuzzleSetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PuzzleSet",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Puzzle set updated");
    Ok(Json(DataResponse { data: set }))
}

/// DELETE /api/puzzle-sets/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PuzzleSetRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PuzzleSet",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Puzzle set deleted");
    Ok(StatusCode::NO_CONTENT)
}
