//! Outbound SMS / WhatsApp delivery through third-party webhooks.
//!
//! The API layer validates the recipient and body, then hands the message to
//! [`MessageGateway::send`], which performs a single HTTP POST to the webhook
//! configured for the channel.

pub mod config;
pub mod gateway;

pub use config::MessagingConfig;
pub use gateway::{DeliveryReceipt, MessageGateway, MessagingError};
