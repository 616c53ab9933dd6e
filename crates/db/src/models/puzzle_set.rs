//! Puzzle set entity model and DTOs.

use coachhub_core::puzzle::Puzzle;
use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `puzzle_sets` table. Puzzles are embedded as JSONB.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PuzzleSet {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub puzzles: Json<Vec<Puzzle>>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePuzzleSet {
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub puzzles: Vec<Puzzle>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePuzzleSet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub puzzles: Option<Vec<Puzzle>>,
    pub is_active: Option<bool>,
}
