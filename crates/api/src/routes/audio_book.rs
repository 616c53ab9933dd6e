//! Route definitions for the `/audio-books` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::audio_book;
use crate::state::AppState;

/// Routes mounted at `/audio-books`.
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
        .route("/", get(audio_book::list).post(audio_book::create))
        .route(
            "/{id}",
            get(audio_book::get_by_id)
                .put(audio_book::update)
                .delete(audio_book::delete),
        )
}
