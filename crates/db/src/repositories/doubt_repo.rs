//! Repository for the `doubts` table.
//!
//! Feedback entries are stored inline as a JSONB array and appended with `||`.

use coachhub_core::doubt::{DoubtFeedback, DOUBT_STATUS_ANSWERED, MAX_FEEDBACK_ENTRIES};
use coachhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use coachhub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::doubt::{CreateDoubt, Doubt, UpdateDoubt};

const COLUMNS: &str = "id, student_name, email, subject, question, answer, status, feedback, \
                       answered_at, created_at, updated_at";

/// Provides CRUD operations for student doubts.
pub struct DoubtRepo;

impl DoubtRepo {
    pub async fn create(pool: &PgPool, input: &CreateDoubt) -> Result<Doubt, sqlx::Error> {
        let query = format!(
            "INSERT INTO doubts (student_name, email, subject, question) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doubt>(&query)
            .bind(&input.student_name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.question)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Doubt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doubts WHERE id = $1");
        sqlx::query_as::<_, Doubt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List doubts, newest first, optionally restricted to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Doubt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM doubts \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Doubt>(&query)
            .bind(status)
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Update a doubt. Moving to `answered` stamps `answered_at` once.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDoubt,
    ) -> Result<Option<Doubt>, sqlx::Error> {
        let query = format!(
            "UPDATE doubts SET \
                student_name = COALESCE($2, student_name), \
                email = COALESCE($3, email), \
                subject = COALESCE($4, subject), \
                question = COALESCE($5, question), \
                answer = COALESCE($6, answer), \
                status = COALESCE($7, status), \
                answered_at = CASE \
                    WHEN $7 = 'answered' THEN COALESCE(answered_at, NOW()) \
                    ELSE answered_at \
                END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doubt>(&query)
            .bind(id)
            .bind(&input.student_name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Record the admin's answer and mark the doubt `answered`.
    ///
    /// Re-answering replaces the text but keeps the original `answered_at`.
    pub async fn answer(
        pool: &PgPool,
        id: DbId,
        answer: &str,
    ) -> Result<Option<Doubt>, sqlx::Error> {
        let query = format!(
            "UPDATE doubts SET \
                answer = $2, \
                status = 'answered', \
                answered_at = COALESCE(answered_at, NOW()) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doubt>(&query)
            .bind(id)
            .bind(answer)
            .fetch_optional(pool)
            .await
    }

    /// Append one feedback entry to the doubt's feedback array.
    ///
    /// The append only happens while the doubt is `answered` and holds fewer
    /// than `MAX_FEEDBACK_ENTRIES` entries; otherwise `None` is returned.
    pub async fn add_feedback(
        pool: &PgPool,
        id: DbId,
        entry: &DoubtFeedback,
    ) -> Result<Option<Doubt>, sqlx::Error> {
        let query = format!(
            "UPDATE doubts SET feedback = feedback || jsonb_build_array($2::jsonb) \
             WHERE id = $1 AND status = $3 AND jsonb_array_length(feedback) < $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Doubt>(&query)
            .bind(id)
            .bind(Json(entry))
            .bind(DOUBT_STATUS_ANSWERED)
            .bind(MAX_FEEDBACK_ENTRIES as i32)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM doubts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
