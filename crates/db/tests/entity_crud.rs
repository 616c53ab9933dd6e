//! Integration tests for the repository layer against a real database:
//! - Create / fetch / update / delete round trips
//! - `is_active` filtering on list
//! - JSONB embedded documents (audio book chapters, crossword clues, doubt feedback)
//! - Unique and check constraint violations

use assert_matches::assert_matches;
use chrono::Utc;
use coachhub_core::audio_book::{AudioChapter, AudioTopic};
use coachhub_core::doubt::{DoubtFeedback, MAX_FEEDBACK_ENTRIES};
use coachhub_core::puzzle::CrosswordClue;
use coachhub_db::models::admin::AdminCredentials;
use coachhub_db::models::audio_book::{CreateAudioBook, UpdateAudioBook};
use coachhub_db::models::course::{CreateCourse, UpdateCourse};
use coachhub_db::models::crossword::CreateCrossword;
use coachhub_db::models::doubt::{CreateDoubt, UpdateDoubt};
use coachhub_db::models::enquiry::{CreateEnquiry, UpdateEnquiry};
use coachhub_db::models::feedback::{CreateFeedback, UpdateFeedback};
use coachhub_db::models::meeting_request::{CreateMeetingRequest, UpdateMeetingRequest};
use coachhub_db::models::video::CreateVideo;
use coachhub_db::repositories::{
    AdminRepo, AudioBookRepo, CourseRepo, CrosswordRepo, DoubtRepo, EnquiryRepo, FeedbackRepo,
    MeetingRequestRepo, VideoRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_course(title: &str) -> CreateCourse {
    CreateCourse {
        title: title.to_string(),
        description: Some("Weekend batch".to_string()),
        category: "competitive".to_string(),
        mode: None,
        duration_weeks: Some(24),
        fee: Some(45_000),
        image_url: None,
        is_active: None,
    }
}

fn new_video(url: &str) -> CreateVideo {
    CreateVideo {
        title: "Orientation".to_string(),
        description: None,
        video_url: url.to_string(),
        thumbnail_url: None,
        video_type: None,
        subject: Some("General".to_string()),
        is_active: None,
    }
}

fn new_doubt() -> CreateDoubt {
    CreateDoubt {
        student_name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        subject: Some("Physics".to_string()),
        question: "Why is the sky blue?".to_string(),
    }
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_round_trip(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("JEE Main"))
        .await
        .unwrap();
    assert_eq!(course.title, "JEE Main");
    assert_eq!(course.mode, "offline"); // column default
    assert!(course.is_active);

    let found = CourseRepo::find_by_id(&pool, course.id)
        .await
        .unwrap()
        .expect("course should exist");
    assert_eq!(found.title, course.title);
    assert_eq!(found.fee, Some(45_000));
    assert_eq!(found.duration_weeks, Some(24));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_update_changes_only_submitted_fields(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("NEET"))
        .await
        .unwrap();

    let update = UpdateCourse {
        fee: Some(50_000),
        ..Default::default()
    };
    let updated = CourseRepo::update(&pool, course.id, &update)
        .await
        .unwrap()
        .expect("course should exist");

    assert_eq!(updated.fee, Some(50_000));
    assert_eq!(updated.title, "NEET");
    assert_eq!(updated.description, course.description);
    assert_eq!(updated.category, course.category);
    assert!(updated.updated_at >= course.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_update_missing_returns_none(pool: PgPool) {
    let result = CourseRepo::update(&pool, 999_999, &UpdateCourse::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_delete(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("Foundation"))
        .await
        .unwrap();

    assert!(CourseRepo::delete(&pool, course.id).await.unwrap());
    assert!(CourseRepo::find_by_id(&pool, course.id)
        .await
        .unwrap()
        .is_none());
    // Second delete finds nothing.
    assert!(!CourseRepo::delete(&pool, course.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_inactive(pool: PgPool) {
    CourseRepo::create(&pool, &new_course("Active"))
        .await
        .unwrap();
    let mut hidden = new_course("Hidden");
    hidden.is_active = Some(false);
    CourseRepo::create(&pool, &hidden).await.unwrap();

    let visible = CourseRepo::list(&pool, false).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Active");

    let all = CourseRepo::list(&pool, true).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_category_check_constraint(pool: PgPool) {
    let mut course = new_course("Bad");
    course.category = "cooking".to_string();
    let err = CourseRepo::create(&pool, &course).await.unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23514"));
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_video_url_rejected(pool: PgPool) {
    let url = "https://videos.example.com/orientation.mp4";
    let video = VideoRepo::create(&pool, &new_video(url)).await.unwrap();
    assert_eq!(video.video_type, "lecture");

    let err = VideoRepo::create(&pool, &new_video(url)).await.unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23505"));

    let found = VideoRepo::find_by_url(&pool, url)
        .await
        .unwrap()
        .expect("video should exist");
    assert_eq!(found.id, video.id);
}

// ---------------------------------------------------------------------------
// Embedded documents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_audio_book_chapters_persist(pool: PgPool) {
    let chapters = vec![AudioChapter {
        title: "Kinematics".to_string(),
        topics: vec![AudioTopic {
            title: "Velocity".to_string(),
            audio_url: "https://cdn.example.com/velocity.mp3".to_string(),
            duration_secs: 540,
        }],
    }];
    let book = AudioBookRepo::create(
        &pool,
        &CreateAudioBook {
            title: "Physics Made Easy".to_string(),
            author: Some("S. Iyer".to_string()),
            description: None,
            cover_image_url: None,
            language: None,
            chapters: chapters.clone(),
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(book.language, "english");
    assert_eq!(book.chapters.0, chapters);

    // Updating the title leaves the chapter tree alone.
    let updated = AudioBookRepo::update(
        &pool,
        book.id,
        &UpdateAudioBook {
            title: Some("Physics Made Easier".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Physics Made Easier");
    assert_eq!(updated.chapters.0, chapters);

    // Replacing chapters swaps the whole tree.
    let replaced = AudioBookRepo::update(
        &pool,
        book.id,
        &UpdateAudioBook {
            chapters: Some(Vec::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(replaced.chapters.0.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_crossword_grid_size_check(pool: PgPool) {
    let clue = CrosswordClue {
        number: 1,
        direction: "across".to_string(),
        row: 0,
        col: 0,
        clue: "Smallest unit of matter".to_string(),
        answer: "ATOM".to_string(),
    };
    let crossword = CrosswordRepo::create(
        &pool,
        &CreateCrossword {
            title: "Science 1".to_string(),
            description: None,
            difficulty: None,
            grid_size: 5,
            clues: vec![clue],
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(crossword.difficulty, "medium");
    assert_eq!(crossword.clues.0.len(), 1);

    let err = CrosswordRepo::create(
        &pool,
        &CreateCrossword {
            title: "Too big".to_string(),
            description: None,
            difficulty: None,
            grid_size: 40,
            clues: Vec::new(),
            is_active: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23514"));
}

// ---------------------------------------------------------------------------
// Doubts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_doubt_answer_and_feedback(pool: PgPool) {
    let doubt = DoubtRepo::create(&pool, &new_doubt()).await.unwrap();
    assert_eq!(doubt.status, "open");
    assert!(doubt.feedback.0.is_empty());
    assert!(doubt.answered_at.is_none());

    let answered = DoubtRepo::answer(&pool, doubt.id, "Rayleigh scattering.")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(answered.status, "answered");
    assert_eq!(answered.answer.as_deref(), Some("Rayleigh scattering."));
    assert!(answered.answered_at.is_some());

    for rating in [4, 5] {
        let entry = DoubtFeedback {
            rating,
            comment: Some("Thanks".to_string()),
            created_at: Utc::now(),
        };
        DoubtRepo::add_feedback(&pool, doubt.id, &entry)
            .await
            .unwrap()
            .unwrap();
    }

    let found = DoubtRepo::find_by_id(&pool, doubt.id).await.unwrap().unwrap();
    let ratings: Vec<i32> = found.feedback.0.iter().map(|f| f.rating).collect();
    assert_eq!(ratings, vec![4, 5]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_doubt_status_update_stamps_answered_at(pool: PgPool) {
    let doubt = DoubtRepo::create(&pool, &new_doubt()).await.unwrap();

    let updated = DoubtRepo::update(
        &pool,
        doubt.id,
        &UpdateDoubt {
            answer: Some("See chapter 4.".to_string()),
            status: Some("answered".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.answered_at.is_some());

    let closed = DoubtRepo::update(
        &pool,
        doubt.id,
        &UpdateDoubt {
            status: Some("closed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(closed.answered_at, updated.answered_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reanswering_keeps_answered_at(pool: PgPool) {
    let doubt = DoubtRepo::create(&pool, &new_doubt()).await.unwrap();

    let first = DoubtRepo::answer(&pool, doubt.id, "one")
        .await
        .unwrap()
        .unwrap();
    let second = DoubtRepo::answer(&pool, doubt.id, "two")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.answer.as_deref(), Some("two"));
    assert_eq!(second.answered_at, first.answered_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feedback_append_is_guarded(pool: PgPool) {
    let doubt = DoubtRepo::create(&pool, &new_doubt()).await.unwrap();
    let entry = DoubtFeedback {
        rating: 3,
        comment: None,
        created_at: Utc::now(),
    };

    // Not answered yet.
    assert!(DoubtRepo::add_feedback(&pool, doubt.id, &entry)
        .await
        .unwrap()
        .is_none());

    DoubtRepo::answer(&pool, doubt.id, "Done").await.unwrap();
    for _ in 0..MAX_FEEDBACK_ENTRIES {
        DoubtRepo::add_feedback(&pool, doubt.id, &entry)
            .await
            .unwrap()
            .unwrap();
    }

    // Full.
    assert!(DoubtRepo::add_feedback(&pool, doubt.id, &entry)
        .await
        .unwrap()
        .is_none());
    let found = DoubtRepo::find_by_id(&pool, doubt.id).await.unwrap().unwrap();
    assert_eq!(found.feedback.0.len(), MAX_FEEDBACK_ENTRIES);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answered_status_requires_answer(pool: PgPool) {
    let doubt = DoubtRepo::create(&pool, &new_doubt()).await.unwrap();

    let err = DoubtRepo::update(
        &pool,
        doubt.id,
        &UpdateDoubt {
            status: Some("answered".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_doubt_list_by_status(pool: PgPool) {
    let first = DoubtRepo::create(&pool, &new_doubt()).await.unwrap();
    DoubtRepo::create(&pool, &new_doubt()).await.unwrap();
    DoubtRepo::answer(&pool, first.id, "Done").await.unwrap();

    let open = DoubtRepo::list(&pool, Some("open"), None, None)
        .await
        .unwrap();
    assert_eq!(open.len(), 1);

    let all = DoubtRepo::list(&pool, None, None, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let page = DoubtRepo::list(&pool, None, Some(1), Some(1)).await.unwrap();
    assert_eq!(page.len(), 1);
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enquiry_status_lifecycle(pool: PgPool) {
    let enquiry = EnquiryRepo::create(
        &pool,
        &CreateEnquiry {
            name: "Meera".to_string(),
            email: None,
            phone: "+919876543210".to_string(),
            course_interest: Some("NEET".to_string()),
            message: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(enquiry.status, "new");

    let updated = EnquiryRepo::update(
        &pool,
        enquiry.id,
        &UpdateEnquiry {
            status: Some("contacted".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status, "contacted");
    assert_eq!(updated.phone, enquiry.phone);

    let contacted = EnquiryRepo::list_by_status(&pool, "contacted", None, None)
        .await
        .unwrap();
    assert_eq!(contacted.len(), 1);
    let fresh = EnquiryRepo::list_by_status(&pool, "new", None, None)
        .await
        .unwrap();
    assert!(fresh.is_empty());

    let err = EnquiryRepo::update(
        &pool,
        enquiry.id,
        &UpdateEnquiry {
            status: Some("spam".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feedback_starts_inactive(pool: PgPool) {
    let feedback = FeedbackRepo::create(
        &pool,
        &CreateFeedback {
            name: "Kiran".to_string(),
            rating: 5,
            message: "Cleared my exam!".to_string(),
            course: None,
        },
    )
    .await
    .unwrap();
    assert!(!feedback.is_active);
    assert!(FeedbackRepo::list(&pool, false).await.unwrap().is_empty());

    FeedbackRepo::update(
        &pool,
        feedback.id,
        &UpdateFeedback {
            is_active: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(FeedbackRepo::list(&pool, false).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_meeting_request_notes(pool: PgPool) {
    let meeting = MeetingRequestRepo::create(
        &pool,
        &CreateMeetingRequest {
            name: "Parent".to_string(),
            email: Some("parent@example.com".to_string()),
            phone: "9876543210".to_string(),
            topic: Some("Progress review".to_string()),
            preferred_date: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(meeting.status, "pending");
    assert!(meeting.notes.is_none());

    let scheduled = MeetingRequestRepo::update(
        &pool,
        meeting.id,
        &UpdateMeetingRequest {
            status: Some("scheduled".to_string()),
            notes: Some("Saturday 10 AM".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(scheduled.status, "scheduled");
    assert_eq!(scheduled.notes.as_deref(), Some("Saturday 10 AM"));
    assert_eq!(MeetingRequestRepo::list(&pool, None, None).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Admins
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_upsert_replaces_hash(pool: PgPool) {
    let first = AdminRepo::upsert(
        &pool,
        &AdminCredentials {
            username: "admin".to_string(),
            password_hash: "hash-one".to_string(),
        },
    )
    .await
    .unwrap();
    let second = AdminRepo::upsert(
        &pool,
        &AdminCredentials {
            username: "admin".to_string(),
            password_hash: "hash-two".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.password_hash, "hash-two");
    assert_eq!(AdminRepo::count(&pool).await.unwrap(), 1);

    AdminRepo::record_login(&pool, first.id).await.unwrap();
    let found = AdminRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .unwrap();
    assert!(found.last_login_at.is_some());
    assert_matches!(AdminRepo::find_by_username(&pool, "nobody").await, Ok(None));
}
