//! Course entity model and DTOs.

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub mode: String,
    pub duration_weeks: Option<i32>,
    /// Fee in whole rupees.
    pub fee: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// Defaults to `offline` if omitted.
    pub mode: Option<String>,
    pub duration_weeks: Option<i32>,
    pub fee: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub mode: Option<String>,
    pub duration_weeks: Option<i32>,
    pub fee: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
