//! Repository for the `magazines` table.

use coachhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::magazine::{CreateMagazine, Magazine, UpdateMagazine};

const COLUMNS: &str =
    "id, title, issue, description, cover_image_url, pdf_url, is_active, created_at, updated_at";

pub struct MagazineRepo;

impl MagazineRepo {
    pub async fn create(pool: &PgPool, input: &CreateMagazine) -> Result<Magazine, sqlx::Error> {
        let query = format!(
            "INSERT INTO magazines \
                (title, issue, description, cover_image_url, pdf_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Magazine>(&query)
            .bind(&input.title)
            .bind(&input.issue)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(&input.pdf_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Magazine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM magazines WHERE id = $1");
        sqlx::query_as::<_, Magazine>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Magazine>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM magazines ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM magazines WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, Magazine>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMagazine,
    ) -> Result<Option<Magazine>, sqlx::Error> {
        let query = format!(
            "UPDATE magazines SET \
                title = COALESCE($2, title), \
                issue = COALESCE($3, issue), \
                description = COALESCE($4, description), \
                cover_image_url = COALESCE($5, cover_image_url), \
                pdf_url = COALESCE($6, pdf_url), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Magazine>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.issue)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(&input.pdf_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM magazines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
