//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod audio_book_repo;
pub mod contact_repo;
pub mod course_repo;
pub mod crossword_repo;
pub mod doubt_repo;
pub mod enquiry_repo;
pub mod feedback_repo;
pub mod magazine_repo;
pub mod meeting_request_repo;
pub mod puzzle_set_repo;
pub mod study_material_repo;
pub mod video_repo;
pub mod webinar_card_repo;

pub use admin_repo::AdminRepo;
pub use audio_book_repo::AudioBookRepo;
pub use contact_repo::ContactRepo;
pub use course_repo::CourseRepo;
pub use crossword_repo::CrosswordRepo;
pub use doubt_repo::DoubtRepo;
pub use enquiry_repo::EnquiryRepo;
pub use feedback_repo::FeedbackRepo;
pub use magazine_repo::MagazineRepo;
pub use meeting_request_repo::MeetingRequestRepo;
pub use puzzle_set_repo::PuzzleSetRepo;
pub use study_material_repo::StudyMaterialRepo;
pub use video_repo::VideoRepo;
pub use webinar_card_repo::WebinarCardRepo;
