//! Notification errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors raised while delivering an estimate
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The recipient address or number is unusable
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    /// The provider rejected or failed the send
    #[error("Delivery failed: {0}")]
    Delivery(#[from] PortError),

    /// No provider is configured for this channel
    #[error("{0} service not configured")]
    NotConfigured(&'static str),
}
