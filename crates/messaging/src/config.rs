//! Messaging gateway configuration loaded from environment variables.

use coachhub_core::messaging::Channel;

/// Webhook endpoints and credentials for outbound messages.
#[derive(Debug, Clone, Default)]
pub struct MessagingConfig {
    pub sms_url: Option<String>,
    pub whatsapp_url: Option<String>,
    /// Sent as `Authorization: Bearer <key>` when present.
    pub api_key: Option<String>,
    /// Forwarded with every message as `sender_id`.
    pub sender_id: Option<String>,
}

impl MessagingConfig {
    /// Load messaging configuration from environment variables.
    ///
    /// | Env var                  | Meaning                           |
    /// |--------------------------|-----------------------------------|
    /// | `MESSAGING_SMS_URL`      | SMS webhook endpoint              |
    /// | `MESSAGING_WHATSAPP_URL` | WhatsApp webhook endpoint         |
    /// | `MESSAGING_API_KEY`      | Bearer key forwarded to webhooks  |
    /// | `MESSAGING_SENDER_ID`    | Sender id forwarded with messages |
    ///
    /// Returns `None` when neither webhook URL is set, which disables the
    /// messaging endpoints entirely.
    pub fn from_env() -> Option<Self> {
        let config = Self {
            sms_url: non_empty_env("MESSAGING_SMS_URL"),
            whatsapp_url: non_empty_env("MESSAGING_WHATSAPP_URL"),
            api_key: non_empty_env("MESSAGING_API_KEY"),
            sender_id: non_empty_env("MESSAGING_SENDER_ID"),
        };

        if config.sms_url.is_none() && config.whatsapp_url.is_none() {
            return None;
        }
        Some(config)
    }

    /// Webhook URL for a channel, or `None` if that channel is not configured.
    pub fn url_for(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Sms => self.sms_url.as_deref(),
            Channel::Whatsapp => self.whatsapp_url.as_deref(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_picks_channel() {
        let config = MessagingConfig {
            sms_url: Some("https://sms.example.com/send".into()),
            ..Default::default()
        };
        assert_eq!(
            config.url_for(Channel::Sms),
            Some("https://sms.example.com/send")
        );
        assert_eq!(config.url_for(Channel::Whatsapp), None);
    }
}
