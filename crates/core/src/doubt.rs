//! Student doubts and the feedback entries embedded in them.

use serde::{Deserialize, Serialize};

use crate::content::validate_one_of;
use crate::error::CoreError;
use crate::types::Timestamp;

pub const DOUBT_STATUS_OPEN: &str = "open";
pub const DOUBT_STATUS_ANSWERED: &str = "answered";
pub const DOUBT_STATUS_CLOSED: &str = "closed";

pub const VALID_DOUBT_STATUSES: &[&str] =
    &[DOUBT_STATUS_OPEN, DOUBT_STATUS_ANSWERED, DOUBT_STATUS_CLOSED];

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Maximum number of feedback entries kept on one doubt.
pub const MAX_FEEDBACK_ENTRIES: usize = 50;

/// A feedback entry left by the student on an answered doubt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubtFeedback {
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

pub fn validate_doubt_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("doubt status", status, VALID_DOUBT_STATUSES)
}

/// Validate a star rating (1..=5). Shared by doubt feedback and testimonials.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Feedback may only be left once the doubt has been answered.
pub fn validate_feedback_allowed(status: &str, existing: usize) -> Result<(), CoreError> {
    if status != DOUBT_STATUS_ANSWERED {
        return Err(CoreError::Conflict(format!(
            "Feedback can only be left on an answered doubt (status is '{status}')"
        )));
    }
    if existing >= MAX_FEEDBACK_ENTRIES {
        return Err(CoreError::Conflict(format!(
            "A doubt may have at most {MAX_FEEDBACK_ENTRIES} feedback entries"
        )));
    }
    Ok(())
}

/// A doubt can only be `answered` once it carries an answer.
pub fn validate_answered_has_answer(status: &str, answer: Option<&str>) -> Result<(), CoreError> {
    let has_answer = answer.is_some_and(|a| !a.trim().is_empty());
    if status == DOUBT_STATUS_ANSWERED && !has_answer {
        return Err(CoreError::Validation(
            "A doubt cannot be marked answered without an answer".into(),
        ));
    }
    Ok(())
}

/// Mean rating across feedback entries, or `None` when there are none.
pub fn average_rating(feedback: &[DoubtFeedback]) -> Option<f64> {
    if feedback.is_empty() {
        return None;
    }
    let sum: i64 = feedback.iter().map(|f| i64::from(f.rating)).sum();
    Some(sum as f64 / feedback.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rating: i32) -> DoubtFeedback {
        DoubtFeedback {
            rating,
            comment: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn average() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[entry(4), entry(5)]), Some(4.5));
    }

    #[test]
    fn feedback_requires_answered_status() {
        assert!(validate_feedback_allowed(DOUBT_STATUS_ANSWERED, 0).is_ok());
        assert!(matches!(
            validate_feedback_allowed(DOUBT_STATUS_OPEN, 0),
            Err(CoreError::Conflict(_))
        ));
        assert!(validate_feedback_allowed(DOUBT_STATUS_ANSWERED, MAX_FEEDBACK_ENTRIES).is_err());
    }

    #[test]
    fn answered_status_needs_an_answer() {
        assert!(validate_answered_has_answer(DOUBT_STATUS_ANSWERED, Some("Rayleigh")).is_ok());
        assert!(validate_answered_has_answer(DOUBT_STATUS_ANSWERED, None).is_err());
        assert!(validate_answered_has_answer(DOUBT_STATUS_ANSWERED, Some("  ")).is_err());
        assert!(validate_answered_has_answer(DOUBT_STATUS_CLOSED, None).is_ok());
    }

    #[test]
    fn statuses() {
        assert!(validate_doubt_status("closed").is_ok());
        assert!(validate_doubt_status("pending").is_err());
    }
}
