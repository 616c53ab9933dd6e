//! Crossword entity model and DTOs.

use coachhub_core::puzzle::CrosswordClue;
use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `crosswords` table. Clues are embedded as JSONB.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Crossword {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub grid_size: i32,
    pub clues: Json<Vec<CrosswordClue>>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrossword {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `medium` if omitted.
    pub difficulty: Option<String>,
    pub grid_size: i32,
    #[serde(default)]
    pub clues: Vec<CrosswordClue>,
    pub is_active: Option<bool>,
}

/// `clues`, when present, replaces the whole clue list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCrossword {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub grid_size: Option<i32>,
    pub clues: Option<Vec<CrosswordClue>>,
    pub is_active: Option<bool>,
}
