pub mod admin;
pub mod audio_book;
pub mod cache;
pub mod contact;
pub mod course;
pub mod crossword;
pub mod doubt;
pub mod enquiry;
pub mod feedback;
pub mod health;
pub mod magazine;
pub mod meeting_request;
pub mod messages;
pub mod puzzle_set;
pub mod study_material;
pub mod video;
pub mod webinar_card;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login                          login (public)
/// /admin/me                             current admin (admin)
///
/// /courses, /videos, /audio-books,
/// /study-materials, /magazines,
/// /crosswords, /puzzle-sets,
/// /webinar-cards                        list, get (public); create, update, delete (admin)
///
/// /enquiries, /contacts,
/// /meeting-requests                     create (public); list, get, update, delete (admin)
///
/// /doubts                               create, get (public); list, update, delete (admin)
/// /doubts/{id}/answer                   answer (admin)
/// /doubts/{id}/feedback                 rate an answered doubt (public)
///
/// /feedback                             list, create (public); update, delete (admin)
///
/// /messages/sms                         send SMS (admin)
/// /messages/whatsapp                    send WhatsApp message (admin)
///
/// /cache                                flush list cache (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        // Catalog content.
        .nest("/courses", course::router())
        .nest("/videos", video::router())
        .nest("/audio-books", audio_book::router())
        .nest("/study-materials", study_material::router())
        .nest("/magazines", magazine::router())
        .nest("/crosswords", crossword::router())
        .nest("/puzzle-sets", puzzle_set::router())
        .nest("/webinar-cards", webinar_card::router())
        // Visitor submissions.
        .nest("/enquiries", enquiry::router())
        .nest("/contacts", contact::router())
        .nest("/meeting-requests", meeting_request::router())
        .nest("/doubts", doubt::router())
        .nest("/feedback", feedback::router())
        // Outbound messaging.
        .nest("/messages", messages::router())
        .nest("/cache", cache::router())
}
