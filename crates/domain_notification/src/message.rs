//! Outbound messages and delivery ports

use async_trait::async_trait;
use serde::Serialize;

use core_kernel::{DomainPort, PortError};

/// Length beyond which an SMS splits into several segments
pub const SMS_SEGMENT_CHARS: usize = 160;

/// A transactional email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// A transactional text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
}

impl SmsMessage {
    /// Length in characters, as the carrier counts them
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }

    pub fn fits_one_segment(&self) -> bool {
        self.char_count() <= SMS_SEGMENT_CHARS
    }
}

/// Provider acknowledgement of an accepted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    /// Provider message id (email id, SMS sid)
    pub message_id: String,
    /// True when no provider was called
    pub simulated: bool,
}

impl DeliveryReceipt {
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            simulated: false,
        }
    }

    pub fn simulated(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            simulated: true,
        }
    }
}

/// Port for transactional email providers
#[async_trait]
pub trait EmailSender: DomainPort {
    async fn send_email(&self, message: &EmailMessage) -> Result<DeliveryReceipt, PortError>;
}

/// Port for SMS providers
#[async_trait]
pub trait SmsSender: DomainPort {
    async fn send_sms(&self, message: &SmsMessage) -> Result<DeliveryReceipt, PortError>;
}
