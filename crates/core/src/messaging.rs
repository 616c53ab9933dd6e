//! Outbound message channels and body validation for the SMS / WhatsApp proxy.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::inquiry::{normalize_phone, validate_phone};

/// Maximum message body length (ten concatenated SMS segments).
pub const MAX_BODY_LEN: usize = 1600;

/// Delivery channel of an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Whatsapp,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Whatsapp => "whatsapp",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a message body (non-empty, at most 1600 chars).
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Message body must not be empty".into()));
    }
    if body.chars().count() > MAX_BODY_LEN {
        return Err(CoreError::Validation(format!(
            "Message body must be at most {MAX_BODY_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate and normalize a recipient phone number.
pub fn normalize_recipient(to: &str) -> Result<String, CoreError> {
    validate_phone(to)?;
    Ok(normalize_phone(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_limits() {
        assert!(validate_body("Your class starts at 5 PM").is_ok());
        assert!(validate_body("").is_err());
        assert!(validate_body(&"x".repeat(MAX_BODY_LEN + 1)).is_err());
    }

    #[test]
    fn recipient_is_normalized() {
        assert_eq!(
            normalize_recipient("+91 98765-43210").unwrap(),
            "+919876543210"
        );
        assert!(normalize_recipient("abc").is_err());
    }

    #[test]
    fn channel_display() {
        assert_eq!(Channel::Sms.to_string(), "sms");
        assert_eq!(Channel::Whatsapp.as_str(), "whatsapp");
    }
}
