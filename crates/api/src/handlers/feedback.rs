//! Handlers for the `/feedback` resource (testimonials).
//!
//! New submissions are stored inactive and only show up in the public list
//! once an admin activates them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::doubt::validate_rating;
use coachhub_core::error::CoreError;
use coachhub_core::inquiry::{validate_message, validate_name};
use coachhub_core::types::DbId;
use coachhub_db::models::feedback::{CreateFeedback, UpdateFeedback};
use coachhub_db::repositories::FeedbackRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{ensure_admin, RequireAdmin};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "feedback";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Feedback",
        id,
    })
}

fn validate_update(input: &UpdateFeedback) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if let Some(message) = &input.message {
        validate_message(message)?;
    }
    Ok(())
}

/// GET /api/feedback?all=false
///
/// `all=true` includes unmoderated entries and requires an admin token.
pub async fn list(
    caller: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    if params.all {
        ensure_admin(caller)?;
    }
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        FeedbackRepo::list(&state.pool, params.all)
    })
    .await
}

/// POST /api/feedback
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name).map_err(AppError::Core)?;
    validate_rating(input.rating).map_err(AppError::Core)?;
    validate_message(&input.message).map_err(AppError::Core)?;

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = feedback.id, rating = feedback.rating, "Feedback submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// PUT /api/feedback/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedback>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, is_active = feedback.is_active, "Feedback updated");
    Ok(Json(DataResponse { data: feedback }))
}

/// DELETE /api/feedback/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !FeedbackRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Feedback deleted");
    Ok(StatusCode::NO_CONTENT)
}
