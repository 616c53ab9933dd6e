//! Handlers for the `/webinar-cards` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::content::{validate_optional_url, validate_title};
use coachhub_core::error::CoreError;
use coachhub_core::types::DbId;
use coachhub_db::models::webinar_card::{CreateWebinarCard, UpdateWebinarCard};
use coachhub_db::repositories::WebinarCardRepo;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "webinar-cards";

fn validate_urls(registration_url: Option<&str>, image_url: Option<&str>) -> Result<(), CoreError> {
    validate_optional_url("registration_url", registration_url)?;
    validate_optional_url("image_url", image_url)
}

/// GET /api/webinar-cards?all=false
///
/// Ordered by schedule; cards without a date come last.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    cached_list(&state.cache, list_key(RESOURCE, params.all), || {
        WebinarCardRepo::list(&state.pool, params.all)
    })
    .await
}

/// GET /api/webinar-cards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let card = WebinarCardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WebinarCard",
            id,
        }))?;
    Ok(Json(DataResponse { data: card }))
}

/// POST /api/webinar-cards
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateWebinarCard>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_urls(input.registration_url.as_deref(), input.image_url.as_deref())
        .map_err(AppError::Core)?;

    let card = WebinarCardRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = card.id, "Webinar card created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// PUT /api/webinar-cards/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWebinarCard>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title).map_err(AppError::Core)?;
    }
    validate_urls(input.registration_url.as_deref(), input.image_url.as_deref())
        .map_err(AppError::Core)?;

    let card = WebinarCardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WebinarCard",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Webinar card updated");
    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/webinar-cards/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !WebinarCardRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WebinarCard",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Webinar card deleted");
    Ok(StatusCode::NO_CONTENT)
}
