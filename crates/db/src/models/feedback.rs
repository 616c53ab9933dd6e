//! Testimonial feedback model and DTOs.
//!
//! Visitor submissions start inactive; the admin activates the ones to show.

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub name: String,
    pub rating: i32,
    pub message: String,
    pub course: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedback {
    pub name: String,
    pub rating: i32,
    pub message: String,
    pub course: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFeedback {
    pub name: Option<String>,
    pub rating: Option<i32>,
    pub message: Option<String>,
    pub course: Option<String>,
    pub is_active: Option<bool>,
}
