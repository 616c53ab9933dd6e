//! Magazine entity model and DTOs.

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `magazines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Magazine {
    pub id: DbId,
    pub title: String,
    /// Free-form issue label, e.g. `"June 2024"`.
    pub issue: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub pdf_url: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMagazine {
    pub title: String,
    pub issue: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub pdf_url: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMagazine {
    pub title: Option<String>,
    pub issue: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub pdf_url: Option<String>,
    pub is_active: Option<bool>,
}
