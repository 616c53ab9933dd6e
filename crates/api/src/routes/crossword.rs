//! Route definitions for the `/crosswords` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::crossword;
use crate::state::AppState;

/// Routes mounted at `/crosswords`.
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
        .route("/", get(crossword::list).post(crossword::create))
        .route(
            "/{id}",
            get(crossword::get_by_id)
                .put(crossword::update)
                .delete(crossword::delete),
        )
}
