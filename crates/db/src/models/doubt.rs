//! Doubt entity model and DTOs.
//!
//! Feedback entries left by the student are embedded as a JSONB array.

use coachhub_core::doubt::DoubtFeedback;
use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `doubts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Doubt {
    pub id: DbId,
    pub student_name: String,
    pub email: String,
    pub subject: Option<String>,
    pub question: String,
    pub answer: Option<String>,
    pub status: String,
    pub feedback: Json<Vec<DoubtFeedback>>,
    pub answered_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a student-submitted doubt. Status always starts at `open`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoubt {
    pub student_name: String,
    pub email: String,
    pub subject: Option<String>,
    pub question: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDoubt {
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub status: Option<String>,
}

/// Request body for `POST /doubts/{id}/answer`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerDoubt {
    pub answer: String,
}

/// Request body for `POST /doubts/{id}/feedback`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoubtFeedback {
    pub rating: i32,
    pub comment: Option<String>,
}
