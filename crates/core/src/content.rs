//! Catalog content constants and field validators.
//!
//! Covers the enum-constrained fields of the public catalog (courses,
//! videos, study materials, audio books) plus the title / URL checks shared
//! by every content resource. The database carries matching CHECK
//! constraints; these validators run first so callers get a readable 400.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Course categories
// ---------------------------------------------------------------------------

pub const COURSE_CATEGORY_FOUNDATION: &str = "foundation";
pub const COURSE_CATEGORY_COMPETITIVE: &str = "competitive";
pub const COURSE_CATEGORY_SCHOOL: &str = "school";
pub const COURSE_CATEGORY_LANGUAGE: &str = "language";
pub const COURSE_CATEGORY_SKILL: &str = "skill";

/// All valid course categories.
pub const VALID_COURSE_CATEGORIES: &[&str] = &[
    COURSE_CATEGORY_FOUNDATION,
    COURSE_CATEGORY_COMPETITIVE,
    COURSE_CATEGORY_SCHOOL,
    COURSE_CATEGORY_LANGUAGE,
    COURSE_CATEGORY_SKILL,
];

// ---------------------------------------------------------------------------
// Course delivery modes
// ---------------------------------------------------------------------------

pub const COURSE_MODE_ONLINE: &str = "online";
pub const COURSE_MODE_OFFLINE: &str = "offline";
pub const COURSE_MODE_HYBRID: &str = "hybrid";

/// All valid course delivery modes.
pub const VALID_COURSE_MODES: &[&str] = &[
    COURSE_MODE_ONLINE,
    COURSE_MODE_OFFLINE,
    COURSE_MODE_HYBRID,
];

// ---------------------------------------------------------------------------
// Video types
// ---------------------------------------------------------------------------

pub const VIDEO_TYPE_LECTURE: &str = "lecture";
pub const VIDEO_TYPE_DEMO: &str = "demo";
pub const VIDEO_TYPE_TESTIMONIAL: &str = "testimonial";
pub const VIDEO_TYPE_EVENT: &str = "event";
pub const VIDEO_TYPE_MOTIVATIONAL: &str = "motivational";

/// All valid video types.
pub const VALID_VIDEO_TYPES: &[&str] = &[
    VIDEO_TYPE_LECTURE,
    VIDEO_TYPE_DEMO,
    VIDEO_TYPE_TESTIMONIAL,
    VIDEO_TYPE_EVENT,
    VIDEO_TYPE_MOTIVATIONAL,
];

// ---------------------------------------------------------------------------
// Study material types
// ---------------------------------------------------------------------------

pub const MATERIAL_TYPE_NOTES: &str = "notes";
pub const MATERIAL_TYPE_QUESTION_PAPER: &str = "question_paper";
pub const MATERIAL_TYPE_MOCK_TEST: &str = "mock_test";
pub const MATERIAL_TYPE_SYLLABUS: &str = "syllabus";
pub const MATERIAL_TYPE_EBOOK: &str = "ebook";

/// All valid study material types.
pub const VALID_MATERIAL_TYPES: &[&str] = &[
    MATERIAL_TYPE_NOTES,
    MATERIAL_TYPE_QUESTION_PAPER,
    MATERIAL_TYPE_MOCK_TEST,
    MATERIAL_TYPE_SYLLABUS,
    MATERIAL_TYPE_EBOOK,
];

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

pub const VALID_LANGUAGES: &[&str] = &[
    "english",
    "hindi",
    "tamil",
    "telugu",
    "kannada",
    "malayalam",
];

/// Maximum length of any title field.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of any URL field.
pub const MAX_URL_LEN: usize = 2048;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject `value` unless it is one of `valid`.
///
/// `field` is the human-readable field name used in the error message.
pub fn validate_one_of(field: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if !valid.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Valid values: {}",
            valid.join(", ")
        )));
    }
    Ok(())
}

/// Validate a title (non-empty after trimming, at most 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an absolute `http` / `https` URL.
///
/// This is a shape check only; reachability is never tested.
pub fn validate_url(field: &str, url: &str) -> Result<(), CoreError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            CoreError::Validation(format!("{field} must start with http:// or https://"))
        })?;
    if rest.is_empty() || rest.starts_with('/') || url.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(format!("{field} is not a valid URL")));
    }
    if url.len() > MAX_URL_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_URL_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a URL that may be omitted.
pub fn validate_optional_url(field: &str, url: Option<&str>) -> Result<(), CoreError> {
    match url {
        Some(u) => validate_url(field, u),
        None => Ok(()),
    }
}

pub fn validate_course_category(category: &str) -> Result<(), CoreError> {
    validate_one_of("course category", category, VALID_COURSE_CATEGORIES)
}

pub fn validate_course_mode(mode: &str) -> Result<(), CoreError> {
    validate_one_of("course mode", mode, VALID_COURSE_MODES)
}

pub fn validate_video_type(video_type: &str) -> Result<(), CoreError> {
    validate_one_of("video type", video_type, VALID_VIDEO_TYPES)
}

pub fn validate_material_type(material_type: &str) -> Result<(), CoreError> {
    validate_one_of("material type", material_type, VALID_MATERIAL_TYPES)
}

pub fn validate_language(language: &str) -> Result<(), CoreError> {
    validate_one_of("language", language, VALID_LANGUAGES)
}

/// Validate that a numeric field (fee, duration, count) is not negative.
pub fn validate_non_negative(field: &str, value: i64) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rejects_blank() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title("").is_err());
    }

    #[test]
    fn title_rejects_too_long() {
        let long = "a".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_title(&long).is_err());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LEN)).is_ok());
    }

    #[test]
    fn url_accepts_http_and_https() {
        assert!(validate_url("video_url", "https://youtu.be/abc123").is_ok());
        assert!(validate_url("video_url", "http://example.com/a.pdf").is_ok());
    }

    #[test]
    fn url_rejects_bad_shapes() {
        assert!(validate_url("video_url", "ftp://example.com").is_err());
        assert!(validate_url("video_url", "https://").is_err());
        assert!(validate_url("video_url", "https:///path").is_err());
        assert!(validate_url("video_url", "https://exa mple.com").is_err());
    }

    #[test]
    fn optional_url_none_is_ok() {
        assert!(validate_optional_url("image_url", None).is_ok());
        assert!(validate_optional_url("image_url", Some("nope")).is_err());
    }

    #[test]
    fn enum_fields_reject_out_of_set_values() {
        assert!(validate_course_category("competitive").is_ok());
        assert!(validate_course_category("cooking").is_err());
        assert!(validate_course_mode("hybrid").is_ok());
        assert!(validate_course_mode("carrier-pigeon").is_err());
        assert!(validate_video_type("lecture").is_ok());
        assert!(validate_video_type("LECTURE").is_err());
        assert!(validate_material_type("mock_test").is_ok());
        assert!(validate_material_type("mock-test").is_err());
        assert!(validate_language("tamil").is_ok());
        assert!(validate_language("klingon").is_err());
    }

    #[test]
    fn enum_error_lists_valid_values() {
        let err = validate_video_type("vlog").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'vlog'"));
        assert!(msg.contains("lecture, demo, testimonial, event, motivational"));
    }

    #[test]
    fn non_negative_boundary() {
        assert!(validate_non_negative("fee", 0).is_ok());
        assert!(validate_non_negative("fee", -1).is_err());
    }
}
