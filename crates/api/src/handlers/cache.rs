//! Handler for flushing the list response cache.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CacheFlushed {
    pub cleared: usize,
}

/// DELETE /api/cache
pub async fn flush(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CacheFlushed>>> {
    let cleared = state.cache.clear().await;
    tracing::info!(admin_id = admin.user_id, cleared, "Response cache flushed");
    Ok(Json(DataResponse {
        data: CacheFlushed { cleared },
    }))
}
