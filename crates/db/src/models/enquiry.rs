//! Enquiry entity model and DTOs.
//!
//! Enquiries are submitted by site visitors and worked through by the admin
//! via `status` (`new` -> `contacted` -> `enrolled` / `closed`).

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `enquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub course_interest: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a visitor-submitted enquiry. Status always starts at `new`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnquiry {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub course_interest: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEnquiry {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_interest: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}
