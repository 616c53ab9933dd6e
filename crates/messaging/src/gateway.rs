//! Single-attempt webhook delivery for outbound messages.
//!
//! [`MessageGateway`] POSTs `{to, body, channel, sender_id}` to the webhook
//! configured for the channel. There is no retry: a failure is reported
//! straight back to the caller.

use std::time::Duration;

use coachhub_core::messaging::Channel;
use serde::Serialize;

use crate::config::MessagingConfig;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for message delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook returned a non-2xx status code.
    #[error("Messaging provider returned HTTP {0}")]
    HttpStatus(u16),

    /// No webhook URL is configured for the requested channel.
    #[error("The {0} channel is not configured")]
    ChannelDisabled(Channel),
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    to: &'a str,
    body: &'a str,
    channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_id: Option<&'a str>,
}

/// Outcome of an accepted delivery.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub channel: Channel,
    pub to: String,
    /// HTTP status returned by the provider.
    pub provider_status: u16,
    /// Provider-assigned message id, when the response body carries one.
    pub provider_message_id: Option<String>,
}

// ---------------------------------------------------------------------------
// MessageGateway
// ---------------------------------------------------------------------------

/// Sends messages to the configured SMS / WhatsApp webhooks.
pub struct MessageGateway {
    client: reqwest::Client,
    config: MessagingConfig,
}

impl MessageGateway {
    /// Create a gateway with a pre-configured HTTP client.
    pub fn new(config: MessagingConfig) -> Result<Self, MessagingError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Whether a webhook is configured for `channel`.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.config.url_for(channel).is_some()
    }

    /// Deliver one message. `to` and `body` must already be validated.
    pub async fn send(
        &self,
        channel: Channel,
        to: &str,
        body: &str,
    ) -> Result<DeliveryReceipt, MessagingError> {
        let url = self
            .config
            .url_for(channel)
            .ok_or(MessagingError::ChannelDisabled(channel))?;

        let payload = OutboundMessage {
            to,
            body,
            channel,
            sender_id: self.config.sender_id.as_deref(),
        };

        let mut request = self.client.post(url).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%channel, error = %e, "Message delivery request failed");
            MessagingError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%channel, status = status.as_u16(), "Messaging provider rejected message");
            return Err(MessagingError::HttpStatus(status.as_u16()));
        }

        // The body is informational only; an unreadable body still counts as delivered.
        let provider_message_id = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .as_ref()
            .and_then(extract_message_id);

        tracing::info!(%channel, provider_message_id = ?provider_message_id, "Message delivered");

        Ok(DeliveryReceipt {
            channel,
            to: to.to_string(),
            provider_status: status.as_u16(),
            provider_message_id,
        })
    }
}

/// Pull a message id out of a provider response (`id`, `message_id` or `sid`).
fn extract_message_id(body: &serde_json::Value) -> Option<String> {
    ["id", "message_id", "sid"]
        .iter()
        .find_map(|key| match body.get(*key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> MessagingConfig {
        MessagingConfig {
            sms_url: Some(format!("{}/sms", server.uri())),
            whatsapp_url: None,
            api_key: Some("test-key".to_string()),
            sender_id: Some("COACHH".to_string()),
        }
    }

    #[tokio::test]
    async fn send_posts_payload_with_bearer_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sms"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(serde_json::json!({
                "to": "+919876543210",
                "body": "Class moved to 6 PM",
                "channel": "sms",
                "sender_id": "COACHH",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg-42"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gateway = MessageGateway::new(config_for(&server)).unwrap();
        let receipt = gateway
            .send(Channel::Sms, "+919876543210", "Class moved to 6 PM")
            .await
            .unwrap();

        assert_eq!(receipt.provider_status, 200);
        assert_eq!(receipt.provider_message_id.as_deref(), Some("msg-42"));
        assert_eq!(receipt.to, "+919876543210");
    }

    #[tokio::test]
    async fn non_success_status_is_reported_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = MessageGateway::new(config_for(&server)).unwrap();
        let result = gateway.send(Channel::Sms, "+919876543210", "hi").await;

        assert_matches!(result, Err(MessagingError::HttpStatus(500)));
    }

    #[tokio::test]
    async fn unconfigured_channel_is_disabled() {
        let server = MockServer::start().await;
        let gateway = MessageGateway::new(config_for(&server)).unwrap();

        assert!(gateway.is_enabled(Channel::Sms));
        assert!(!gateway.is_enabled(Channel::Whatsapp));
        assert_matches!(
            gateway.send(Channel::Whatsapp, "+919876543210", "hi").await,
            Err(MessagingError::ChannelDisabled(Channel::Whatsapp))
        );
    }

    #[tokio::test]
    async fn plain_text_response_still_delivers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
            .mount(&server)
            .await;

        let gateway = MessageGateway::new(config_for(&server)).unwrap();
        let receipt = gateway
            .send(Channel::Sms, "+919876543210", "hi")
            .await
            .unwrap();

        assert_eq!(receipt.provider_status, 202);
        assert!(receipt.provider_message_id.is_none());
    }

    #[test]
    fn message_id_extraction() {
        assert_eq!(
            extract_message_id(&serde_json::json!({"sid": "SM1"})).as_deref(),
            Some("SM1")
        );
        assert_eq!(
            extract_message_id(&serde_json::json!({"message_id": 7})).as_deref(),
            Some("7")
        );
        assert_eq!(extract_message_id(&serde_json::json!({"ok": true})), None);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            MessagingError::HttpStatus(502).to_string(),
            "Messaging provider returned HTTP 502"
        );
        assert_eq!(
            MessagingError::ChannelDisabled(Channel::Whatsapp).to_string(),
            "The whatsapp channel is not configured"
        );
    }
}
