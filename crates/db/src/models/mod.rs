//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin;
pub mod audio_book;
pub mod contact;
pub mod course;
pub mod crossword;
pub mod doubt;
pub mod enquiry;
pub mod feedback;
pub mod magazine;
pub mod meeting_request;
pub mod puzzle_set;
pub mod study_material;
pub mod video;
pub mod webinar_card;
