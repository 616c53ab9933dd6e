//! Webinar card entity model and DTOs.

use coachhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `webinar_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WebinarCard {
    pub id: DbId,
    pub title: String,
    pub speaker: Option<String>,
    pub description: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub registration_url: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWebinarCard {
    pub title: String,
    pub speaker: Option<String>,
    pub description: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub registration_url: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWebinarCard {
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub description: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub registration_url: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
