//! Visitor submissions: enquiries, contact messages and meeting requests.
//!
//! Status constants plus validators for the person-facing fields (name,
//! email, phone, free-text message) these forms share.

use crate::content::validate_one_of;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enquiry statuses
// ---------------------------------------------------------------------------

pub const ENQUIRY_STATUS_NEW: &str = "new";
pub const ENQUIRY_STATUS_CONTACTED: &str = "contacted";
pub const ENQUIRY_STATUS_ENROLLED: &str = "enrolled";
pub const ENQUIRY_STATUS_CLOSED: &str = "closed";

pub const VALID_ENQUIRY_STATUSES: &[&str] = &[
    ENQUIRY_STATUS_NEW,
    ENQUIRY_STATUS_CONTACTED,
    ENQUIRY_STATUS_ENROLLED,
    ENQUIRY_STATUS_CLOSED,
];

// ---------------------------------------------------------------------------
// Meeting request statuses
// ---------------------------------------------------------------------------

pub const MEETING_STATUS_PENDING: &str = "pending";
pub const MEETING_STATUS_SCHEDULED: &str = "scheduled";
pub const MEETING_STATUS_COMPLETED: &str = "completed";
pub const MEETING_STATUS_CANCELLED: &str = "cancelled";

pub const VALID_MEETING_STATUSES: &[&str] = &[
    MEETING_STATUS_PENDING,
    MEETING_STATUS_SCHEDULED,
    MEETING_STATUS_COMPLETED,
    MEETING_STATUS_CANCELLED,
];

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

pub fn validate_enquiry_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("enquiry status", status, VALID_ENQUIRY_STATUSES)
}

pub fn validate_meeting_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("meeting status", status, VALID_MEETING_STATUSES)
}

/// Validate a person's name (non-empty, at most 100 chars).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an email address shape: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid email address '{email}'"));

    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && tld.len() >= 2 => Ok(()),
        _ => Err(invalid()),
    }
}

/// Strip spaces, dashes and parentheses from a phone number.
///
/// A leading `+` is preserved.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

/// Validate a phone number: 7-15 digits with an optional leading `+`.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    let normalized = normalize_phone(phone);
    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
    if digits.len() < MIN_PHONE_DIGITS
        || digits.len() > MAX_PHONE_DIGITS
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CoreError::Validation(format!(
            "Invalid phone number '{phone}'"
        )));
    }
    Ok(())
}

/// Validate a free-text message (non-empty, at most 5000 chars).
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation("Message must not be empty".into()));
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(CoreError::Validation(format!(
            "Message must be at most {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}
