use std::sync::Arc;

use coachhub_messaging::MessageGateway;

use crate::cache::ResponseCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: coachhub_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// TTL cache for public list responses.
    pub cache: Arc<ResponseCache>,
    /// SMS / WhatsApp gateway; `None` when no webhook is configured.
    pub messaging: Option<Arc<MessageGateway>>,
}
