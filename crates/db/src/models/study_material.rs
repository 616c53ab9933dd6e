//! Study material entity model and DTOs.

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `study_materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudyMaterial {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub material_type: String,
    pub file_url: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new study material.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudyMaterial {
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub material_type: String,
    pub file_url: String,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing study material. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudyMaterial {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub material_type: Option<String>,
    pub file_url: Option<String>,
    pub is_active: Option<bool>,
}
