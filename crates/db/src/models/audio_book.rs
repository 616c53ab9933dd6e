//! Audio book entity model and DTOs.
//!
//! Chapters (and the topics inside them) are embedded as a JSONB array.

use coachhub_core::audio_book::AudioChapter;
use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `audio_books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AudioBook {
    pub id: DbId,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub language: String,
    pub chapters: Json<Vec<AudioChapter>>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new audio book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAudioBook {
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    /// Defaults to `english` if omitted.
    pub language: Option<String>,
    #[serde(default)]
    pub chapters: Vec<AudioChapter>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing audio book.
///
/// `chapters`, when present, replaces the whole chapter tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAudioBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub language: Option<String>,
    pub chapters: Option<Vec<AudioChapter>>,
    pub is_active: Option<bool>,
}
