//! Repository for the `audio_books` table.

use coachhub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::audio_book::{AudioBook, CreateAudioBook, UpdateAudioBook};

const COLUMNS: &str = "id, title, author, description, cover_image_url, language, chapters, \
                       is_active, created_at, updated_at";

/// Provides CRUD operations for audio books.
pub struct AudioBookRepo;

impl AudioBookRepo {
    /// Insert a new audio book with its full chapter tree.
    pub async fn create(pool: &PgPool, input: &CreateAudioBook) -> Result<AudioBook, sqlx::Error> {
        let query = format!(
            "INSERT INTO audio_books \
                (title, author, description, cover_image_url, language, chapters, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'english'), $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioBook>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(&input.language)
            .bind(Json(&input.chapters))
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AudioBook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audio_books WHERE id = $1");
        sqlx::query_as::<_, AudioBook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<AudioBook>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM audio_books ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM audio_books WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, AudioBook>(&query).fetch_all(pool).await
    }

    /// Update an audio book. A present `chapters` replaces the whole tree.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAudioBook,
    ) -> Result<Option<AudioBook>, sqlx::Error> {
        let query = format!(
            "UPDATE audio_books SET \
                title = COALESCE($2, title), \
                author = COALESCE($3, author), \
                description = COALESCE($4, description), \
                cover_image_url = COALESCE($5, cover_image_url), \
                language = COALESCE($6, language), \
                chapters = COALESCE($7, chapters), \
                is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioBook>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(&input.language)
            .bind(input.chapters.as_ref().map(Json))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audio_books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
