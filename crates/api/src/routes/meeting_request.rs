//! Route definitions for the `/meeting-requests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meeting_request;
use crate::state::AppState;

/// Routes mounted at `/meeting-requests`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meeting_request::list).post(meeting_request::create))
        .route(
            "/{id}",
            get(meeting_request::get_by_id)
                .put(meeting_request::update)
                .delete(meeting_request::delete),
        )
}
