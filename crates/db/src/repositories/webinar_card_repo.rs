//! Repository for the `webinar_cards` table.

use coachhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::webinar_card::{CreateWebinarCard, UpdateWebinarCard, WebinarCard};

const COLUMNS: &str = "id, title, speaker, description, scheduled_at, registration_url, \
                       image_url, is_active, created_at, updated_at";

pub struct WebinarCardRepo;

impl WebinarCardRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateWebinarCard,
    ) -> Result<WebinarCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO webinar_cards \
                (title, speaker, description, scheduled_at, registration_url, image_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebinarCard>(&query)
            .bind(&input.title)
            .bind(&input.speaker)
            .bind(&input.description)
            .bind(input.scheduled_at)
            .bind(&input.registration_url)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WebinarCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webinar_cards WHERE id = $1");
        sqlx::query_as::<_, WebinarCard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List webinar cards by schedule (unscheduled last), optionally
    /// including inactive ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<WebinarCard>, sqlx::Error> {
        let query = if include_inactive {
            format!(
                "SELECT {COLUMNS} FROM webinar_cards \
                 ORDER BY scheduled_at ASC NULLS LAST, id DESC"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM webinar_cards WHERE is_active = true \
                 ORDER BY scheduled_at ASC NULLS LAST, id DESC"
            )
        };
        sqlx::query_as::<_, WebinarCard>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWebinarCard,
    ) -> Result<Option<WebinarCard>, sqlx::Error> {
        let query = format!(
            "UPDATE webinar_cards SET \
                title = COALESCE($2, title), \
                speaker = COALESCE($3, speaker), \
                description = COALESCE($4, description), \
                scheduled_at = COALESCE($5, scheduled_at), \
                registration_url = COALESCE($6, registration_url), \
                image_url = COALESCE($7, image_url), \
                is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebinarCard>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.speaker)
            .bind(&input.description)
            .bind(input.scheduled_at)
            .bind(&input.registration_url)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM webinar_cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
