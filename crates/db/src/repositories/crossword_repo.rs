//! Repository for the `crosswords` table.

use coachhub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::crossword::{CreateCrossword, Crossword, UpdateCrossword};

const COLUMNS: &str =
    "id, title, description, difficulty, grid_size, clues, is_active, created_at, updated_at";

pub struct CrosswordRepo;

impl CrosswordRepo {
    pub async fn create(pool: &PgPool, input: &CreateCrossword) -> Result<Crossword, sqlx::Error> {
        let query = format!(
            "INSERT INTO crosswords \
                (title, description, difficulty, grid_size, clues, is_active) \
             VALUES ($1, $2, COALESCE($3, 'medium'), $4, $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crossword>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.difficulty)
            .bind(input.grid_size)
            .bind(Json(&input.clues))
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Crossword>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crosswords WHERE id = $1");
        sqlx::query_as::<_, Crossword>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Crossword>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM crosswords ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM crosswords WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, Crossword>(&query).fetch_all(pool).await
    }

    /// Update a crossword. A present `clues` replaces the whole clue list.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCrossword,
    ) -> Result<Option<Crossword>, sqlx::Error> {
        let query = format!(
            "UPDATE crosswords SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                difficulty = COALESCE($4, difficulty), \
                grid_size = COALESCE($5, grid_size), \
                clues = COALESCE($6, clues), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crossword>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.difficulty)
            .bind(input.grid_size)
            .bind(input.clues.as_ref().map(Json))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM crosswords WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
