//! Handlers for the `/doubts` resource.
//!
//! Students post doubts and read them back by id without signing in. The
//! admin answers them, after which the student may leave rated feedback.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use coachhub_core::doubt::{
    average_rating, validate_answered_has_answer, validate_doubt_status,
    validate_feedback_allowed, validate_rating, DoubtFeedback,
};
use coachhub_core::error::CoreError;
use coachhub_core::inquiry::{validate_email, validate_message, validate_name};
use coachhub_core::types::DbId;
use coachhub_db::models::doubt::{
    AnswerDoubt, CreateDoubt, CreateDoubtFeedback, Doubt, UpdateDoubt,
};
use coachhub_db::repositories::DoubtRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A doubt together with the mean rating of its feedback.
#[derive(Debug, Serialize)]
pub struct DoubtView {
    #[serde(flatten)]
    pub doubt: Doubt,
    pub average_rating: Option<f64>,
}

impl From<Doubt> for DoubtView {
    fn from(doubt: Doubt) -> Self {
        let average_rating = average_rating(&doubt.feedback.0);
        Self {
            doubt,
            average_rating,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Doubt",
        id,
    })
}

fn validate_create(input: &CreateDoubt) -> Result<(), CoreError> {
    validate_name(&input.student_name)?;
    validate_email(&input.email)?;
    validate_message(&input.question)
}

fn validate_update(input: &UpdateDoubt) -> Result<(), CoreError> {
    if let Some(name) = &input.student_name {
        validate_name(name)?;
    }
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(question) = &input.question {
        validate_message(question)?;
    }
    if let Some(answer) = &input.answer {
        validate_message(answer)?;
    }
    if let Some(status) = &input.status {
        validate_doubt_status(status)?;
    }
    Ok(())
}

/// POST /api/doubts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDoubt>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Core)?;

    let doubt = DoubtRepo::create(&state.pool, &input).await?;

    tracing::info!(id = doubt.id, "Doubt submitted");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DoubtView::from(doubt),
        }),
    ))
}

/// GET /api/doubts?status=&limit=&offset=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_doubt_status(status).map_err(AppError::Core)?;
    }

    let doubts = DoubtRepo::list(
        &state.pool,
        params.status.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    let views: Vec<DoubtView> = doubts.into_iter().map(DoubtView::from).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/doubts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let doubt = DoubtRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: DoubtView::from(doubt),
    }))
}

/// PUT /api/doubts/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDoubt>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input).map_err(AppError::Core)?;

    if let Some(status) = &input.status {
        if input.answer.is_none() {
            let existing = DoubtRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| not_found(id))?;
            validate_answered_has_answer(status, existing.answer.as_deref())
                .map_err(AppError::Core)?;
        }
    }

    let doubt = DoubtRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, status = %doubt.status, "Doubt updated");
    Ok(Json(DataResponse {
        data: DoubtView::from(doubt),
    }))
}

/// POST /api/doubts/{id}/answer
///
/// Sets the answer and moves the doubt to `answered`. Answering again
/// replaces the previous answer.
pub async fn answer(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AnswerDoubt>,
) -> AppResult<impl IntoResponse> {
    validate_message(&input.answer).map_err(AppError::Core)?;

    let doubt = DoubtRepo::answer(&state.pool, id, &input.answer)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, admin_id = admin.user_id, "Doubt answered");
    Ok(Json(DataResponse {
        data: DoubtView::from(doubt),
    }))
}

/// POST /api/doubts/{id}/feedback
///
/// Returns 409 unless the doubt has been answered.
pub async fn add_feedback(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateDoubtFeedback>,
) -> AppResult<impl IntoResponse> {
    validate_rating(input.rating).map_err(AppError::Core)?;
    if let Some(comment) = &input.comment {
        validate_message(comment).map_err(AppError::Core)?;
    }

    let existing = DoubtRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_feedback_allowed(&existing.status, existing.feedback.0.len())
        .map_err(AppError::Core)?;

    let entry = DoubtFeedback {
        rating: input.rating,
        comment: input.comment,
        created_at: Utc::now(),
    };
    let Some(doubt) = DoubtRepo::add_feedback(&state.pool, id, &entry).await? else {
        // The doubt changed or was deleted since the check above.
        let current = DoubtRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        validate_feedback_allowed(&current.status, current.feedback.0.len())
            .map_err(AppError::Core)?;
        return Err(AppError::Core(CoreError::Conflict(
            "Doubt changed while feedback was being recorded".into(),
        )));
    };

    tracing::info!(id, rating = entry.rating, "Doubt feedback recorded");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DoubtView::from(doubt),
        }),
    ))
}

/// DELETE /api/doubts/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !DoubtRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Doubt deleted");
    Ok(StatusCode::NO_CONTENT)
}
