//! In-memory port implementations
//!
//! Senders record what they were asked to send; the address lookup answers
//! from a fixed list and counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};
use domain_estimate::{AddressLookup, AddressQuery, AddressSuggestion};
use domain_notification::{DeliveryReceipt, EmailMessage, EmailSender, SmsMessage, SmsSender};

/// Email sender that keeps every message
#[derive(Debug, Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl DomainPort for RecordingEmailSender {}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<DeliveryReceipt, PortError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(DeliveryReceipt::sent(format!("email-{}", sent.len())))
    }
}

/// SMS sender that keeps every message
#[derive(Debug, Default)]
pub struct RecordingSmsSender {
    sent: Mutex<Vec<SmsMessage>>,
}

impl RecordingSmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SmsMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl DomainPort for RecordingSmsSender {}

#[async_trait]
impl SmsSender for RecordingSmsSender {
    async fn send_sms(&self, message: &SmsMessage) -> Result<DeliveryReceipt, PortError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(DeliveryReceipt::sent(format!("SM{:04}", sent.len())))
    }
}

/// Address lookup answering from a fixed list
#[derive(Debug, Default)]
pub struct StaticAddressLookup {
    suggestions: Vec<AddressSuggestion>,
    calls: AtomicUsize,
}

impl StaticAddressLookup {
    pub fn new(suggestions: Vec<AddressSuggestion>) -> Self {
        Self {
            suggestions,
            calls: AtomicUsize::new(0),
        }
    }

    /// A lookup holding one Fargo suggestion
    pub fn fargo() -> Self {
        Self::new(vec![AddressSuggestion {
            id: "fargo-1".into(),
            address: "123 Main St, Fargo, ND 58102, United States".into(),
            address_line1: Some("123 Main St".into()),
            address_line2: Some("Fargo, ND 58102, United States".into()),
            city: Some("Fargo".into()),
            state: Some("North Dakota".into()),
            postcode: Some("58102".into()),
            country: Some("United States".into()),
            confidence: 0.95,
            lat: 46.877,
            lon: -96.789,
            result_type: Some("building".into()),
        }])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DomainPort for StaticAddressLookup {}

#[async_trait]
impl AddressLookup for StaticAddressLookup {
    async fn suggest(&self, query: &AddressQuery) -> Result<Vec<AddressSuggestion>, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .suggestions
            .iter()
            .take(query.limit() as usize)
            .cloned()
            .collect())
    }
}
