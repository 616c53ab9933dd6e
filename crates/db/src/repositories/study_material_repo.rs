//! Repository for the `study_materials` table.

use coachhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::study_material::{CreateStudyMaterial, StudyMaterial, UpdateStudyMaterial};

const COLUMNS: &str =
    "id, title, description, subject, material_type, file_url, is_active, created_at, updated_at";

/// Provides CRUD operations for study materials.
pub struct StudyMaterialRepo;

impl StudyMaterialRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudyMaterial,
    ) -> Result<StudyMaterial, sqlx::Error> {
        let query = format!(
            "INSERT INTO study_materials \
                (title, description, subject, material_type, file_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyMaterial>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.subject)
            .bind(&input.material_type)
            .bind(&input.file_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudyMaterial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM study_materials WHERE id = $1");
        sqlx::query_as::<_, StudyMaterial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List study materials, newest first, optionally including inactive ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<StudyMaterial>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM study_materials ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM study_materials WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, StudyMaterial>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudyMaterial,
    ) -> Result<Option<StudyMaterial>, sqlx::Error> {
        let query = format!(
            "UPDATE study_materials SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                subject = COALESCE($4, subject), \
                material_type = COALESCE($5, material_type), \
                file_url = COALESCE($6, file_url), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyMaterial>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.subject)
            .bind(&input.material_type)
            .bind(&input.file_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM study_materials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
