//! Repository for the `puzzle_sets` table.

use coachhub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::puzzle_set::{CreatePuzzleSet, PuzzleSet, UpdatePuzzleSet};

const COLUMNS: &str =
    "id, title, description, difficulty, puzzles, is_active, created_at, updated_at";

pub struct PuzzleSetRepo;

impl PuzzleSetRepo {
    pub async fn create(pool: &PgPool, input: &CreatePuzzleSet) -> Result<PuzzleSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO puzzle_sets (title, description, difficulty, puzzles, is_active) \
             VALUES ($1, $2, COALESCE($3, 'medium'), $4, COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PuzzleSet>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.difficulty)
            .bind(Json(&input.puzzles))
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PuzzleSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM puzzle_sets WHERE id = $1");
        sqlx::query_as::<_, PuzzleSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<PuzzleSet>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM puzzle_sets ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM puzzle_sets WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, PuzzleSet>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePuzzleSet,
    ) -> Result<Option<PuzzleSet>, sqlx::Error> {
        let query = format!(
            "UPDATE puzzle_sets SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                difficulty = COALESCE($4, difficulty), \
                puzzles = COALESCE($5, puzzles), \
                is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PuzzleSet>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.difficulty)
            .bind(input.puzzles.as_ref().map(Json))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM puzzle_sets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
