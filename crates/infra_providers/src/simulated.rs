//! Tracing-only email sender
//!
//! Used when no email provider key is configured. Messages are logged, not
//! sent, and the receipt is marked simulated.

use async_trait::async_trait;
use tracing::{debug, warn};

use core_kernel::{DeliveryId, DomainPort, PortError};
use domain_notification::{DeliveryReceipt, EmailMessage, EmailSender};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedEmailSender;

impl DomainPort for SimulatedEmailSender {}

#[async_trait]
impl EmailSender for SimulatedEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<DeliveryReceipt, PortError> {
        let id = DeliveryId::new();
        warn!(
            delivery_id = %id,
            to = %message.to,
            subject = %message.subject,
            "No email provider configured; email not sent"
        );
        debug!(delivery_id = %id, html = %message.html, "Simulated email body");
        Ok(DeliveryReceipt::simulated(id.to_string()))
    }
}
