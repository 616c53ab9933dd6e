use axum::routing::post;
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST /sms        -> send_sms
/// POST /whatsapp   -> send_whatsapp
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sms", post(messages::send_sms))
        .route("/whatsapp", post(messages::send_whatsapp))
}
