//! Route definitions for the `/study-materials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::study_material;
use crate::state::AppState;

/// Routes mounted at `/study-materials`.
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
        .route("/", get(study_material::list).post(study_material::create))
        .route(
            "/{id}",
            get(study_material::get_by_id)
                .put(study_material::update)
                .delete(study_material::delete),
        )
}
