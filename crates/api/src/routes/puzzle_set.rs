//! Route definitions for the `/puzzle-sets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::puzzle_set;
use crate::state::AppState;

/// Routes mounted at `/puzzle-sets`.
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
        .route("/", get(puzzle_set::list).post(puzzle_set::create))
        .route(
            "/{id}",
            get(puzzle_set::get_by_id)
                .put(puzzle_set::update)
                .delete(puzzle_set::delete),
        )
}
