//! Route definitions for the `/magazines` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::magazine;
use crate::state::AppState;

/// Routes mounted at `/magazines`.
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
        .route("/", get(magazine::list).post(magazine::create))
        .route(
            "/{id}",
            get(magazine::get_by_id)
                .put(magazine::update)
                .delete(magazine::delete),
        )
}
