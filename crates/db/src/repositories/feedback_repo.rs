//! Repository for the `feedback` (testimonials) table.

use coachhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};

const COLUMNS: &str = "id, name, rating, message, course, is_active, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a visitor testimonial. New rows start inactive until approved.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (name, rating, message, course) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.name)
            .bind(input.rating)
            .bind(&input.message)
            .bind(&input.course)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM feedback ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM feedback WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET \
                name = COALESCE($2, name), \
                rating = COALESCE($3, rating), \
                message = COALESCE($4, message), \
                course = COALESCE($5, course), \
                is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.rating)
            .bind(&input.message)
            .bind(&input.course)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
