//! Handlers for the `/messages` resource: outbound SMS and WhatsApp.
//!
//! Each request makes a single delivery attempt through the configured
//! webhook. Nothing is persisted.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use coachhub_core::messaging::{normalize_recipient, validate_body, Channel};
use coachhub_messaging::{DeliveryReceipt, MessageGateway};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for both send endpoints.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub to: String,
    pub body: String,
}

fn gateway(state: &AppState) -> AppResult<&Arc<MessageGateway>> {
    state
        .messaging
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Messaging is not configured".into()))
}

async fn send(
    state: &AppState,
    channel: Channel,
    input: SendMessageRequest,
) -> AppResult<Json<DataResponse<DeliveryReceipt>>> {
    let gateway = gateway(state)?;
    validate_body(&input.body).map_err(AppError::Core)?;
    let to = normalize_recipient(&input.to).map_err(AppError::Core)?;

    let receipt = gateway.send(channel, &to, &input.body).await?;

    tracing::info!(
        channel = %channel,
        provider_status = receipt.provider_status,
        "Message delivered to provider",
    );
    Ok(Json(DataResponse { data: receipt }))
}

/// POST /api/messages/sms
pub async fn send_sms(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SendMessageRequest>,
) -> AppResult<Json<DataResponse<DeliveryReceipt>>> {
    send(&state, Channel::Sms, input).await
}

/// POST /api/messages/whatsapp
pub async fn send_whatsapp(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SendMessageRequest>,
) -> AppResult<Json<DataResponse<DeliveryReceipt>>> {
    send(&state, Channel::Whatsapp, input).await
}
