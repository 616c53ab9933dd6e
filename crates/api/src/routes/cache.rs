use axum::routing::delete;
use axum::Router;

use crate::handlers::cache;
use crate::state::AppState;

/// Routes mounted at `/cache`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", delete(cache::flush))
}
