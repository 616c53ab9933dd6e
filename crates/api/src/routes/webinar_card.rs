//! Route definitions for the `/webinar-cards` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::webinar_card;
use crate::state::AppState;

/// Routes mounted at `/webinar-cards`.
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
        .route("/", get(webinar_card::list).post(webinar_card::create))
        .route(
            "/{id}",
            get(webinar_card::get_by_id)
                .put(webinar_card::update)
                .delete(webinar_card::delete),
        )
}
