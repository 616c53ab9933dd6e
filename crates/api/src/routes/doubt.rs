//! Route definitions for the `/doubts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::doubt;
use crate::state::AppState;

/// Routes mounted at `/doubts`.
///
/// ```text
/// GET    /                -> list (admin)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update (admin)
/// DELETE /{id}            -> delete (admin)
/// POST   /{id}/answer     -> answer (admin)
/// POST   /{id}/feedback   -> add_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(doubt::list).post(doubt::create))
        .route(
            "/{id}",
            get(doubt::get_by_id)
                .put(doubt::update)
                .delete(doubt::delete),
        )
        .route("/{id}/answer", post(doubt::answer))
        .route("/{id}/feedback", post(doubt::add_feedback))
}
