//! Route definitions for the `/feedback` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET    /       -> list (?all=true is admin only)
/// POST   /       -> create
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route("/{id}", put(feedback::update).delete(feedback::delete))
}
