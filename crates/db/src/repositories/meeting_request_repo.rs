//! Repository for the `meeting_requests` table.

use coachhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use coachhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting_request::{
    CreateMeetingRequest, MeetingRequest, UpdateMeetingRequest,
};

const COLUMNS: &str = "id, name, email, phone, topic, preferred_date, status, notes, \
                       created_at, updated_at";

/// Provides CRUD operations for meeting requests.
pub struct MeetingRequestRepo;

impl MeetingRequestRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMeetingRequest,
    ) -> Result<MeetingRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO meeting_requests (name, email, phone, topic, preferred_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingRequest>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.topic)
            .bind(input.preferred_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MeetingRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meeting_requests WHERE id = $1");
        sqlx::query_as::<_, MeetingRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List meeting requests, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<MeetingRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meeting_requests \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, MeetingRequest>(&query)
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeetingRequest,
    ) -> Result<Option<MeetingRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE meeting_requests SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone), \
                topic = COALESCE($5, topic), \
                preferred_date = COALESCE($6, preferred_date), \
                status = COALESCE($7, status), \
                notes = COALESCE($8, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingRequest>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.topic)
            .bind(input.preferred_date)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meeting_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
