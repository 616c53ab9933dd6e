pub mod admin;
pub mod audio_book;
pub mod cache;
pub mod contact;
pub mod course;
pub mod crossword;
pub mod doubt;
pub mod enquiry;
pub mod feedback;
pub mod magazine;
pub mod meeting_request;
pub mod messages;
pub mod puzzle_set;
pub mod study_material;
pub mod video;
pub mod webinar_card;
