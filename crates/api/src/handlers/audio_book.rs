//! Handlers for the `/audio-books` resource.
//!
//! Responses add derived totals (`total_duration_secs`, `topic_count`) next
//! to the stored chapter tree.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coachhub_core::audio_book::{topic_count, total_duration_secs, validate_chapters};
use coachhub_core::content::{validate_language, validate_optional_url, validate_title};
use coachhub_core::error::CoreError;
use coachhub_core::types::DbId;
use coachhub_db::models::audio_book::{AudioBook, CreateAudioBook, UpdateAudioBook};
use coachhub_db::repositories::AudioBookRepo;
use serde::Serialize;

use crate::cache::{cached_list, list_key};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const RESOURCE: &str = "audio-books";

/// An audio book with totals computed from its chapters.
#[derive(Debug, Serialize)]
pub struct AudioBookView {
    #[serde(flatten)]
    pub book: AudioBook,
    pub total_duration_secs: i64,
    pub topic_count: usize,
}

impl From<AudioBook> for AudioBookView {
    fn from(book: AudioBook) -> Self {
        let total_duration_secs = total_duration_secs(&book.chapters.0);
        let topic_count = topic_count(&book.chapters.0);
        Self {
            book,
            total_duration_secs,
            topic_count,
        }
    }
}

fn validate_create(input: &CreateAudioBook) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_optional_url("cover_image_url", input.cover_image_url.as_deref())?;
    if let Some(language) = &input.language {
        validate_language(language)?;
    }
    validate_chapters(&input.chapters)
}

fn validate_update(input: &UpdateAudioBook) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    validate_optional_url("cover_image_url", input.cover_image_url.as_deref())?;
    if let Some(language) = &input.language {
        validate_language(language)?;
    }
    if let Some(chapters) = &input.chapters {
        validate_chapters(chapters)?;
    }
    Ok(())
}

/// GET /api/audio-books?all=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let all = params.all;
    cached_list(&state.cache, list_key(RESOURCE, all), move || async move {
        AudioBookRepo::list(pool, all).await.map(|books| {
            books
                .into_iter()
                .map(AudioBookView::from)
                .collect::<Vec<_>>()
        })
    })
    .await
}

/// GET /api/audio-books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = AudioBookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioBook",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: AudioBookView::from(book),
    }))
}

/// POST /api/audio-books
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAudioBook>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let book = AudioBookRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id = book.id, chapters = book.chapters.0.len(), "Audio book created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AudioBookView::from(book),
        }),
    ))
}

/// PUT /api/audio-books/{id}
///
/// A submitted `chapters` array replaces the whole tree.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAudioBook>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    let book = AudioBookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioBook",
            id,
        }))?;
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Audio book updated");
    Ok(Json(DataResponse {
        data: AudioBookView::from(book),
    }))
}

/// DELETE /api/audio-books/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AudioBookRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AudioBook",
            id,
        }));
    }
    state.cache.invalidate(RESOURCE).await;

    tracing::info!(id, "Audio book deleted");
    Ok(StatusCode::NO_CONTENT)
}
