//! Estimate delivery service
//!
//! Renders an estimate record and hands it to the configured senders.
//! The calculator never sees this module; delivery only consumes results.

use std::sync::Arc;
use tracing::{error, info, warn};
use validator::ValidateEmail;

use domain_estimate::{ContactInfo, EstimateRecord, EstimateRequest};

use crate::error::NotificationError;
use crate::message::{DeliveryReceipt, EmailSender, SmsSender};
use crate::templates;

/// Receipts for the two emails sent per estimate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDelivery {
    pub customer: DeliveryReceipt,
    pub business: DeliveryReceipt,
}

/// Sends estimates to customers and to the business inbox
pub struct EstimateDeliveryService {
    email: Arc<dyn EmailSender>,
    sms: Option<Arc<dyn SmsSender>>,
    business_inbox: String,
    support_phone: String,
}

impl EstimateDeliveryService {
    pub fn new(
        email: Arc<dyn EmailSender>,
        business_inbox: impl Into<String>,
        support_phone: impl Into<String>,
    ) -> Self {
        Self {
            email,
            sms: None,
            business_inbox: business_inbox.into(),
            support_phone: support_phone.into(),
        }
    }

    /// Enables the SMS channel
    pub fn with_sms(mut self, sms: Arc<dyn SmsSender>) -> Self {
        self.sms = Some(sms);
        self
    }

    pub fn sms_enabled(&self) -> bool {
        self.sms.is_some()
    }

    /// Emails the estimate to the customer, then notifies the business
    ///
    /// # Errors
    ///
    /// * `InvalidRecipient` if the customer email is not a valid address
    /// * `Delivery` if either send fails; the business email is not sent
    ///   when the customer email fails
    pub async fn send_email(
        &self,
        contact: &ContactInfo,
        request: &EstimateRequest,
        record: &EstimateRecord,
    ) -> Result<EmailDelivery, NotificationError> {
        let to = contact.email.trim();
        if !to.validate_email() {
            return Err(NotificationError::InvalidRecipient(to.to_string()));
        }

        let customer_message =
            templates::customer_email(contact, request, record, Some(&self.business_inbox));
        let customer = self.email.send_email(&customer_message).await.map_err(|e| {
            error!(estimate_id = %record.estimate_id, error = %e, "Customer email failed");
            e
        })?;

        let business_message = templates::business_email(&self.business_inbox, contact, request, record);
        let business = self.email.send_email(&business_message).await.map_err(|e| {
            error!(estimate_id = %record.estimate_id, error = %e, "Business email failed");
            e
        })?;

        info!(
            estimate_id = %record.estimate_id,
            customer_message_id = %customer.message_id,
            business_message_id = %business.message_id,
            "Estimate emails sent"
        );

        Ok(EmailDelivery { customer, business })
    }

    /// Texts a short estimate summary to a phone number
    ///
    /// # Errors
    ///
    /// * `NotConfigured` if no SMS sender was supplied
    /// * `InvalidRecipient` if the phone number is blank
    /// * `Delivery` if the provider rejects the message
    pub async fn send_sms(
        &self,
        phone: &str,
        request: &EstimateRequest,
        record: &EstimateRecord,
    ) -> Result<DeliveryReceipt, NotificationError> {
        let sms = self.sms.as_ref().ok_or(NotificationError::NotConfigured("SMS"))?;

        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(NotificationError::InvalidRecipient(phone.trim().to_string()));
        }

        let message = templates::sms_message(phone, request, record, &self.support_phone);
        if !message.fits_one_segment() {
            warn!(
                estimate_id = %record.estimate_id,
                chars = message.char_count(),
                "SMS body exceeds one segment"
            );
        }

        let receipt = sms.send_sms(&message).await.map_err(|e| {
            error!(estimate_id = %record.estimate_id, error = %e, "SMS send failed");
            e
        })?;

        info!(estimate_id = %record.estimate_id, message_id = %receipt.message_id, "Estimate SMS sent");
        Ok(receipt)
    }
}
