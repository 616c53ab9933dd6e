//! Route definitions for the `/enquiries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::enquiry;
use crate::state::AppState;

/// Routes mounted at `/enquiries`.
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
        .route("/", get(enquiry::list).post(enquiry::create))
        .route(
            "/{id}",
            get(enquiry::get_by_id)
                .put(enquiry::update)
                .delete(enquiry::delete),
        )
}
