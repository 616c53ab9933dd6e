//! Meeting request model and DTOs.

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `meeting_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingRequest {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub topic: Option<String>,
    pub preferred_date: Option<Timestamp>,
    pub status: String,
    /// Internal admin notes, never set by the visitor.
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeetingRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub topic: Option<String>,
    pub preferred_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMeetingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub topic: Option<String>,
    pub preferred_date: Option<Timestamp>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
